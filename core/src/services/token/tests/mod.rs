//! Tests for the token codec and revocation cleanup

mod codec_tests;
