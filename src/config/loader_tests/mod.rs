mod mock_fs;

mod discovery_tests;
