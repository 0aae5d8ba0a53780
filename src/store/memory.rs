use crate::models::{Album, Photo};
use crate::store::{AlbumStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory album store with the same conditional-update semantics as the
/// Postgres store. Used by the test suite and for running the server without
/// a database.
#[derive(Default)]
pub struct MemoryAlbumStore {
    albums: Mutex<HashMap<String, Album>>,
}

impl MemoryAlbumStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_album(&self, album: Album) {
        self.albums
            .lock()
            .expect("album map poisoned")
            .insert(album.id.clone(), album);
    }

    #[must_use]
    pub fn get_album(&self, album_id: &str) -> Option<Album> {
        self.albums
            .lock()
            .expect("album map poisoned")
            .get(album_id)
            .cloned()
    }

    pub fn remove_album(&self, album_id: &str) {
        self.albums
            .lock()
            .expect("album map poisoned")
            .remove(album_id);
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn find_album(
        &self,
        album_id: &str,
        owner_id: &str,
    ) -> Result<Option<Album>, StoreError> {
        Ok(self
            .albums
            .lock()
            .expect("album map poisoned")
            .get(album_id)
            .filter(|a| a.owner_id == owner_id)
            .cloned())
    }

    async fn append_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError> {
        let mut albums = self.albums.lock().expect("album map poisoned");
        match albums
            .get_mut(album_id)
            .filter(|a| a.owner_id == owner_id)
        {
            Some(album) => {
                album.photos.extend_from_slice(photos);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn replace_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError> {
        let mut albums = self.albums.lock().expect("album map poisoned");
        match albums
            .get_mut(album_id)
            .filter(|a| a.owner_id == owner_id)
        {
            Some(album) => {
                album.photos = photos.to_vec();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
