//! Profile entity <-> model mapper

use meibo_core::entities::Profile;
use meibo_core::value_objects::DocId;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: DocId::new(model.id),
            name: model.name,
            english_name: model.english_name,
            age: model.age.and_then(|a| u32::try_from(a).ok()),
            occupation: model.occupation,
            company: model.company,
            location: model.location,
            bio: model.bio,
            skills: model.skills,
            email: model.email,
            phone: model.phone,
            website: model.website,
            image: model.image,
            original_image: model.original_image,
            extracted_text: model.extracted_text,
            is_approved: model.is_approved,
            uploaded_by: model.uploaded_by,
            uploaded_at: model.uploaded_at,
            created_at: model.created_at,
            original_page: model.original_page,
        }
    }
}
