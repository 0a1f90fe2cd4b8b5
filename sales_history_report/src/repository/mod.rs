pub mod history_repository_impl;
