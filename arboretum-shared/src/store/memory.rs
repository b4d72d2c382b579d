use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::models::{
    image::{CreateImage, Image},
    species::{CreateSpecies, Species, UpdateSpecies},
    user::{CreateUser, User},
    video::Video,
};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    species: Vec<Species>,
    images: Vec<Image>,
    videos: Vec<Video>,
}

/// In-memory [`Store`] backed by vectors behind one `RwLock`.
///
/// Every write takes the single write lock, so multi-collection operations
/// are atomic with respect to other requests. Contents are lost when the
/// process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
}

impl MemoryStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut collections = self.data.write().await;

        if collections.users.iter().any(|u| u.username == data.username) {
            return Err(StoreError::Conflict(format!(
                "username '{}' already exists",
                data.username
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: data.username,
            password_hash: data.password_hash,
        };
        collections.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.username == username).cloned())
    }

    async fn count_users(&self) -> StoreResult<i64> {
        Ok(self.data.read().await.users.len() as i64)
    }

    async fn create_species(&self, data: CreateSpecies) -> StoreResult<(Species, Image)> {
        let mut collections = self.data.write().await;

        let species = Species {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            quantity: data.quantity,
            height: data.height,
            trunk_size: data.trunk_size,
            image: None,
            last_updated: Utc::now(),
        };
        let image = Image {
            id: Uuid::new_v4(),
            name: data.name,
            image: data.image,
            species_id: Some(species.id),
        };

        collections.species.push(species.clone());
        collections.images.push(image.clone());
        Ok((species, image))
    }

    async fn list_species(&self) -> StoreResult<Vec<Species>> {
        Ok(self.data.read().await.species.clone())
    }

    async fn update_species(&self, id: Uuid, data: UpdateSpecies) -> StoreResult<Option<Species>> {
        let mut collections = self.data.write().await;

        let Some(species) = collections.species.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };

        species.name = data.name;
        species.quantity = data.quantity;
        species.height = data.height;
        species.trunk_size = data.trunk_size;
        species.last_updated = Utc::now();

        Ok(Some(species.clone()))
    }

    async fn delete_species(&self, id: Uuid) -> StoreResult<bool> {
        let mut collections = self.data.write().await;

        let Some(index) = collections.species.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        collections.species.remove(index);
        collections.images.retain(|image| image.species_id != Some(id));
        Ok(true)
    }

    async fn create_image(&self, data: CreateImage) -> StoreResult<Image> {
        let image = Image {
            id: Uuid::new_v4(),
            name: data.name,
            image: data.image,
            species_id: data.species_id,
        };
        self.data.write().await.images.push(image.clone());
        Ok(image)
    }

    async fn find_image(&self, id: Uuid) -> StoreResult<Option<Image>> {
        let data = self.data.read().await;
        Ok(data.images.iter().find(|image| image.id == id).cloned())
    }

    async fn list_images_for_species(&self, species_id: Uuid) -> StoreResult<Vec<Image>> {
        let data = self.data.read().await;
        Ok(data
            .images
            .iter()
            .filter(|image| image.species_id == Some(species_id))
            .cloned()
            .collect())
    }

    async fn create_video(&self, video: String) -> StoreResult<Video> {
        let video = Video {
            id: Uuid::new_v4(),
            video,
        };
        self.data.write().await.videos.push(video.clone());
        Ok(video)
    }

    async fn list_videos(&self) -> StoreResult<Vec<Video>> {
        Ok(self.data.read().await.videos.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oak() -> CreateSpecies {
        CreateSpecies {
            name: "Oak".to_string(),
            quantity: 5.0,
            height: 10.0,
            trunk_size: 2.0,
            image: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        let new_user = || CreateUser {
            username: "maple".to_string(),
            password_hash: "hash".to_string(),
        };

        store.create_user(new_user()).await.unwrap();
        let result = store.create_user(new_user()).await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_species_links_image() {
        let store = MemoryStore::new();
        let (species, image) = store.create_species(oak()).await.unwrap();

        assert_eq!(image.species_id, Some(species.id));
        assert_eq!(image.name, "Oak");
        assert!(species.image.is_none());

        let linked = store.list_images_for_species(species.id).await.unwrap();
        assert_eq!(linked, vec![image]);
    }

    #[tokio::test]
    async fn test_update_refreshes_last_updated() {
        let store = MemoryStore::new();
        let (species, _) = store.create_species(oak()).await.unwrap();

        let updated = store
            .update_species(
                species.id,
                UpdateSpecies {
                    name: "Red Oak".to_string(),
                    quantity: 7.0,
                    height: 12.5,
                    trunk_size: 3.0,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, species.id);
        assert_eq!(updated.name, "Red Oak");
        assert_eq!(updated.quantity, 7.0);
        assert!(updated.last_updated >= species.last_updated);
    }

    #[tokio::test]
    async fn test_update_unknown_species() {
        let store = MemoryStore::new();
        let result = store
            .update_species(
                Uuid::new_v4(),
                UpdateSpecies {
                    name: "Ghost".to_string(),
                    quantity: 1.0,
                    height: 1.0,
                    trunk_size: 1.0,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_species_cascades_to_linked_images_only() {
        let store = MemoryStore::new();
        let (species, _) = store.create_species(oak()).await.unwrap();
        let standalone = store
            .create_image(CreateImage {
                name: "Loose".to_string(),
                image: Some("AAAA".to_string()),
                species_id: None,
            })
            .await
            .unwrap();

        assert!(store.delete_species(species.id).await.unwrap());
        assert!(store.list_species().await.unwrap().is_empty());
        assert!(store.list_images_for_species(species.id).await.unwrap().is_empty());

        assert_eq!(store.find_image(standalone.id).await.unwrap(), Some(standalone));
    }

    #[tokio::test]
    async fn test_delete_unknown_species() {
        let store = MemoryStore::new();
        assert!(!store.delete_species(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_videos_listed_in_upload_order() {
        let store = MemoryStore::new();
        let first = store.create_video("data:video/mp4;base64,AA".to_string()).await.unwrap();
        let second = store.create_video("data:video/webm;base64,BB".to_string()).await.unwrap();

        assert_eq!(store.list_videos().await.unwrap(), vec![first, second]);
    }
}
