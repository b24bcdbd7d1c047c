pub mod sqlite_feature_repo;
pub mod postgres_feature_repo;
