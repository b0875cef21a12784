use std::io::Write;
use std::path::Path;

use loam_core::arena::Arena;
use loam_core::ascii;
use loam_core::buf::Buf;

/// Owns an [`Arena`] together with a record of the files loaded into it,
/// and prints diagnostics on behalf of its caller.
pub struct Session {
    arena: Arena,
    files: Vec<LoadedFile>,
    #[cfg(feature = "crossterm")]
    colored_output: bool,
}

struct LoadedFile {
    repr_path: String,
    len: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            files: Vec::new(),
            #[cfg(feature = "crossterm")]
            colored_output: false,
        }
    }

    /// Returns a reference to the underlying `Arena`.
    #[must_use]
    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a mutable reference to the underlying `Arena`.
    #[must_use]
    #[inline]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    #[cfg(feature = "crossterm")]
    pub fn set_colored_output(&mut self, colored_output: bool) {
        self.colored_output = colored_output;
    }

    /// Loads a file with the provided `data` into the arena.
    ///
    /// `repr_path` is used to represent the file in messages and
    /// statistics.
    pub fn load_virt_file(&mut self, repr_path: &str, data: &[u8]) -> Buf {
        let buf = Buf::new(&mut self.arena, data);
        self.files.push(LoadedFile {
            repr_path: repr_path.into(),
            len: data.len(),
        });
        buf
    }

    /// Loads a file from the filesystem into the arena.
    ///
    /// In case of failure, the error is printed to stderr and `None` is
    /// returned.
    pub fn load_real_file(&mut self, path: &Path) -> Option<Buf> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.print_error(format_args!("file {path:?} does not exist"));
                return None;
            }
            Err(e) => {
                self.print_error(format_args!("failed to read {path:?}: {e}"));
                return None;
            }
        };
        let repr_path = path.to_string_lossy();
        Some(self.load_virt_file(repr_path.as_ref(), &data))
    }

    /// Writes a summary of the arena (per-region usage) and of the loaded
    /// files to `out`.
    pub fn dump_stats(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let regions = self.arena.region_count();
        let noun = if regions == 1 { "region" } else { "regions" };
        writeln!(
            out,
            "arena: {regions} {noun}, {}/{} bytes used",
            self.arena.used(),
            self.arena.capacity(),
        )?;
        for (i, (used, capacity)) in self.arena.region_usage().enumerate() {
            writeln!(out, "  region {i}: {used}/{capacity}")?;
        }
        writeln!(out, "files: {}", self.files.len())?;
        for file in self.files.iter() {
            writeln!(out, "  {}: {} bytes", file.repr_path, file.len)?;
        }
        Ok(())
    }

    /// Writes a hex/ASCII dump of `buf` to `out`.
    pub fn dump_buffer(&self, buf: Buf, out: &mut dyn Write) -> std::io::Result<()> {
        let bytes = buf.as_bytes(&self.arena);
        writeln!(out, "buffer: {} bytes", bytes.len())?;
        for (i, chunk) in bytes.chunks(16).enumerate() {
            write!(out, "{:08x} ", i * 16)?;
            for j in 0..16 {
                if j % 8 == 0 {
                    write!(out, " ")?;
                }
                match chunk.get(j) {
                    Some(byte) => write!(out, "{byte:02x} ")?,
                    None => write!(out, "   ")?,
                }
            }
            write!(out, " |")?;
            for &byte in chunk {
                let shown = if ascii::is_print(byte) { byte } else { b'.' };
                out.write_all(&[shown])?;
            }
            writeln!(out, "|")?;
        }
        Ok(())
    }

    pub fn print_error<T: std::fmt::Display>(&self, msg: T) {
        self.print_rich_message(&crate::print::render_error_message(msg));
    }

    pub fn print_note<T: std::fmt::Display>(&self, msg: T) {
        self.print_rich_message(&crate::print::render_note_message(msg));
    }

    fn print_rich_message(&self, msg: &[(String, crate::print::TextPartKind)]) {
        #[cfg(feature = "crossterm")]
        if self.colored_output {
            crate::print::output_stderr_colored(msg);
            return;
        }

        crate::print::output_stderr_plain(msg);
    }
}
