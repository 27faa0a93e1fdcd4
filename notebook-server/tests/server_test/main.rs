mod block_api_test;
mod collaboration_api_test;
