mod content_tests;
mod evasive_tests;
mod flow_tests;
mod timeline_tests;
