//! User entity <-> model mapper

use meibo_core::entities::User;
use meibo_core::value_objects::Role;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let extra = match model.extra {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        User {
            email: model.email,
            username: model.username,
            role: Role::parse(&model.role),
            created_at: model.created_at,
            extra,
        }
    }
}
