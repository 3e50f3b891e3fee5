mod hit_test_tests;
