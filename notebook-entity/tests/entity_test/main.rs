mod page_test;
mod record_test;
