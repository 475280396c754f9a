// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazeway-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazeway and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Maze folder helpers: the meta json shape and the temp-and-rename writer.

#[derive(Debug, Serialize, Deserialize)]
struct MetaJson {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    mazes: Vec<MetaEntryJson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MetaEntryJson {
    id: u64,
    name: String,
}

fn first_id() -> u64 {
    1
}

impl MetaJson {
    fn from_meta(meta: &MazeMeta) -> Self {
        Self {
            next_id: meta.next_id,
            mazes: meta
                .mazes
                .iter()
                .map(|entry| MetaEntryJson {
                    id: entry.id.get(),
                    name: entry.name.as_str().to_owned(),
                })
                .collect(),
        }
    }

    fn into_meta(self) -> Result<MazeMeta, StoreError> {
        let mut mazes = Vec::with_capacity(self.mazes.len());
        for entry in self.mazes {
            let id = MazeId::new(entry.id);
            let name = match MazeName::new(entry.name.as_str()) {
                Ok(name) => name,
                Err(source) => {
                    return Err(StoreError::InvalidName {
                        id,
                        value: entry.name,
                        source,
                    })
                }
            };
            mazes.push(MazeMetaEntry { id, name });
        }
        Ok(MazeMeta {
            next_id: self.next_id,
            mazes,
        })
    }
}

fn definition_file_name(id: MazeId) -> String {
    format!("{id}.maze.txt")
}

fn io_error_at(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

fn refuse_symlink(path: &Path) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => Err(StoreError::SymlinkRefused {
            path: path.to_path_buf(),
        }),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_file_name(file_name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(".{file_name}.{}-{nanos}-{seq}.tmp", std::process::id())
}

impl MazeFolder {
    /// Creates `<root>/mazes` if needed; a symlink or a plain file in its place is an error.
    fn ensure_mazes_dir(&self) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.root).map_err(io_error_at(&self.root))?;
        let dir = self.mazes_dir();
        refuse_symlink(&dir)?;
        match fs::create_dir(&dir) {
            Ok(()) => Ok(dir),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(dir),
            Err(source) => Err(StoreError::Io { path: dir, source }),
        }
    }

    /// Atomically replaces `dir/file_name` with `contents`.
    ///
    /// The bytes go to a fresh temp file in `dir` which is renamed over the target. The temp
    /// file is removed again on every failure after it was created.
    fn replace_file(&self, dir: &Path, file_name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let target = dir.join(file_name);
        refuse_symlink(&target)?;

        let tmp = dir.join(temp_file_name(file_name));
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp)
            .map_err(io_error_at(&tmp))?;

        let durable = self.durability == WriteDurability::Durable;
        let staged = file
            .write_all(contents)
            .and_then(|()| if durable { file.sync_all() } else { Ok(()) })
            .map_err(io_error_at(&tmp));
        drop(file);

        let replaced =
            staged.and_then(|()| fs::rename(&tmp, &target).map_err(io_error_at(&target)));
        if let Err(err) = replaced {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        if durable {
            sync_dir(dir)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<(), StoreError> {
    fs::File::open(dir)
        .and_then(|handle| handle.sync_all())
        .map_err(io_error_at(dir))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<(), StoreError> {
    Ok(())
}
