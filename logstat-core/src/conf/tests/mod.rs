mod analyzer_tests;
