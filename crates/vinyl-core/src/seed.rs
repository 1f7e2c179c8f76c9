use crate::album::NewAlbum;

/// The albums inserted at startup into an empty store.
///
/// Ids are only meaningful to the in-memory store; database stores assign
/// their own.
pub fn seed_albums() -> Vec<NewAlbum> {
    vec![
        NewAlbum::new("Blue Train", "John Coltrane", 56.99).with_id("1"),
        NewAlbum::new("Jeru", "Gerry Mulligan", 17.99).with_id("2"),
        NewAlbum::new("Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99).with_id("3"),
    ]
}
