pub mod directory_user_id;
pub mod user_principal_name;
