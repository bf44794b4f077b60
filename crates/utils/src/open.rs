//! Scoped readers over named resources.
//!
//! [`reader`] and [`readers`] open resources by name, hand them to a callback,
//! and release every handle that was opened before returning. That holds on
//! all exit paths: a callback error, a callback panic, or a later name in a
//! batch failing to open.
//!
//! Opening goes through the [`Open`] trait. [`FileOpener`] is the filesystem
//! implementation used by the plain functions; the `_with` variants accept any
//! opener.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, trace};
use with_core::{Error, OpenerConfig, Result};

/// Readable handle produced by [`FileOpener`]
pub type FileHandle = BufReader<File>;

/// Something that can turn a resource name into a readable handle
pub trait Open {
    /// The handle type. It is released when dropped.
    type Handle;

    /// Open the resource called `name`
    fn open(&self, name: &Path) -> io::Result<Self::Handle>;
}

/// Opens files read-only, buffered according to an [`OpenerConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOpener {
    config: OpenerConfig,
}

impl FileOpener {
    /// Create an opener with the given configuration
    pub fn new(config: OpenerConfig) -> Self {
        Self { config }
    }

    /// Create an opener configured from the environment
    pub fn from_env() -> Result<Self> {
        OpenerConfig::from_env().map(Self::new)
    }

    /// Get the configuration in use
    pub fn config(&self) -> &OpenerConfig {
        &self.config
    }
}

impl Open for FileOpener {
    type Handle = FileHandle;

    fn open(&self, name: &Path) -> io::Result<Self::Handle> {
        let file = File::open(name)?;
        Ok(BufReader::with_capacity(self.config.buffer_capacity, file))
    }
}

/// Open `name` as a file and call `cb` with it.
///
/// The callback is not invoked if the file cannot be opened. The open failure
/// is returned as [`Error::Open`], converted into the callback's error type.
/// The handle is closed before this function returns.
pub fn reader<P, F, T, E>(name: P, cb: F) -> std::result::Result<T, E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut FileHandle) -> std::result::Result<T, E>,
    E: From<Error>,
{
    reader_with(&FileOpener::default(), name, cb)
}

/// Like [`reader`], opening through `opener`
pub fn reader_with<O, P, F, T, E>(opener: &O, name: P, cb: F) -> std::result::Result<T, E>
where
    O: Open + ?Sized,
    P: AsRef<Path>,
    F: FnOnce(&mut O::Handle) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let name = name.as_ref();
    let mut handles = Handles::with_capacity(1);
    handles.push(name, opener.open(name).map_err(|e| Error::open(name, e))?);

    cb(&mut handles.handles[0])
}

/// Open every name in order as a file and call `cb` with all of the handles.
///
/// Handles are passed in the same order as `names`. If a name fails to open,
/// the handles opened so far are released, the callback is not invoked, and
/// the failure names the resource. An empty list invokes the callback with an
/// empty slice.
pub fn readers<I, F, T, E>(names: I, cb: F) -> std::result::Result<T, E>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    F: FnOnce(&mut [FileHandle]) -> std::result::Result<T, E>,
    E: From<Error>,
{
    readers_with(&FileOpener::default(), names, cb)
}

/// Like [`readers`], opening through `opener`
pub fn readers_with<O, I, F, T, E>(opener: &O, names: I, cb: F) -> std::result::Result<T, E>
where
    O: Open + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<Path>,
    F: FnOnce(&mut [O::Handle]) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let names = names.into_iter();
    let mut handles = Handles::with_capacity(names.size_hint().0);

    for name in names {
        let name = name.as_ref();
        match opener.open(name) {
            Ok(handle) => handles.push(name, handle),
            Err(e) => {
                debug!(
                    resource = %name.display(),
                    opened = handles.len(),
                    "open failed, releasing earlier resources"
                );
                return Err(Error::open(name, e).into());
            }
        }
    }

    cb(&mut handles.handles)
}

/// Owns opened handles and releases them in reverse opening order on drop
struct Handles<H> {
    handles: Vec<H>,
}

impl<H> Handles<H> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, name: &Path, handle: H) {
        trace!(resource = %name.display(), index = self.handles.len(), "opened resource");
        self.handles.push(handle);
    }

    fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<H> Drop for Handles<H> {
    fn drop(&mut self) {
        let count = self.handles.len();
        while let Some(handle) = self.handles.pop() {
            drop(handle);
        }
        if count > 0 {
            trace!(count, "released resources");
        }
    }
}
