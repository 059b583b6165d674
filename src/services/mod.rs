pub mod docs_service;
