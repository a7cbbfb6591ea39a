pub mod short_server;
