mod revoked_token_tests;
