pub mod ai_service;
pub mod attempt_service;
pub mod batch_service;
pub mod extraction_service;
pub mod prompt_service;
