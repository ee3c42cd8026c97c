mod expected_tests;
