//! Typed reader and writer extension traits.

use serde::de::DeserializeOwned;
use serde::Serialize;

use treefs_store::{Path, TreeStore, WriteOptions};

use crate::codec::Codec;
use crate::error::Result;

/// Extension trait for typed reads.
///
/// # Example
///
/// ```rust
/// use treefs_serde::{JsonCodec, TypedReader, TypedWriter};
/// use treefs_store::TreeStore;
///
/// let mut store: TreeStore = TreeStore::new();
/// store.write_as("build/jobs", &4u32, &JsonCodec).unwrap();
///
/// let jobs: u32 = store.read_as("build/jobs", &JsonCodec).unwrap();
/// assert_eq!(jobs, 4);
/// ```
pub trait TypedReader<C> {
    /// Read a file and deserialize its content.
    fn read_as<T: DeserializeOwned>(
        &self,
        path: impl Into<Path>,
        codec: &impl Codec<C>,
    ) -> Result<T>;
}

impl<C, A> TypedReader<C> for TreeStore<C, A> {
    fn read_as<T: DeserializeOwned>(
        &self,
        path: impl Into<Path>,
        codec: &impl Codec<C>,
    ) -> Result<T> {
        let content = self.read_file(path)?;
        codec.decode(content)
    }
}

/// Extension trait for typed writes.
pub trait TypedWriter<C> {
    /// Serialize a value and write it as file content, creating parents.
    fn write_as<T: Serialize>(
        &mut self,
        path: impl Into<Path>,
        value: &T,
        codec: &impl Codec<C>,
    ) -> Result<()> {
        self.write_as_with(path, value, codec, WriteOptions::default())
    }

    fn write_as_with<T: Serialize>(
        &mut self,
        path: impl Into<Path>,
        value: &T,
        codec: &impl Codec<C>,
        options: WriteOptions,
    ) -> Result<()>;
}

impl<C, A: Default> TypedWriter<C> for TreeStore<C, A> {
    fn write_as_with<T: Serialize>(
        &mut self,
        path: impl Into<Path>,
        value: &T,
        codec: &impl Codec<C>,
        options: WriteOptions,
    ) -> Result<()> {
        // Encode first so a bad value leaves the tree untouched
        let content = codec.encode(value)?;
        self.write_file_with(path, content, options)?;
        Ok(())
    }
}
