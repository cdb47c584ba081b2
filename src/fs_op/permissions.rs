//! Nine-bit owner/group/other permission masks and the get/set operations.
//!
//! A `PermissionMask` always holds exactly the low nine mode bits; anything
//! above `0o777` (setuid, sticky, file-type bits) is rejected on construction
//! and stripped when read from metadata.

use std::fmt;
use std::fs::{self, Metadata};
use std::str::FromStr;

use super::context::DirectoryContext;
use super::error::{FsOpError, FsResult};
use super::stat;

const MAX_BITS: u32 = 0o777;

/// Read/write/execute flags for one permission class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triad {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Triad {
    fn from_bits(bits: u32) -> Self {
        Triad {
            read: bits & 0o4 != 0,
            write: bits & 0o2 != 0,
            execute: bits & 0o1 != 0,
        }
    }

    fn bits(self) -> u32 {
        (self.read as u32) << 2 | (self.write as u32) << 1 | self.execute as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PermissionMask(u16);

impl PermissionMask {
    /// Build from a raw mode value. Values above `0o777` are `InvalidMask`.
    pub fn from_bits(bits: u32) -> FsResult<Self> {
        if bits > MAX_BITS {
            return Err(FsOpError::InvalidMask(format!("{:o} exceeds 777", bits)));
        }
        Ok(PermissionMask(bits as u16))
    }

    pub fn from_triads(owner: Triad, group: Triad, other: Triad) -> Self {
        PermissionMask((owner.bits() << 6 | group.bits() << 3 | other.bits()) as u16)
    }

    /// Parse an octal string such as `644`, `0644` or `0o644`.
    pub fn parse_octal(text: &str) -> FsResult<Self> {
        let t = text.trim();
        let digits = t.strip_prefix("0o").unwrap_or(t);
        if digits.is_empty() || !digits.chars().all(|c| ('0'..='7').contains(&c)) {
            return Err(FsOpError::InvalidMask(format!("`{}` is not an octal number", text.trim())));
        }
        let bits = u32::from_str_radix(digits, 8)
            .map_err(|e| FsOpError::InvalidMask(format!("`{}`: {}", digits, e)))?;
        Self::from_bits(bits)
    }

    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        PermissionMask((meta.permissions().mode() & MAX_BITS) as u16)
    }

    // Only the read-only flag exists here; approximate it as rw-rw-rw- / r--r--r--.
    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> Self {
        if meta.permissions().readonly() {
            PermissionMask(0o444)
        } else {
            PermissionMask(0o666)
        }
    }

    pub fn bits(self) -> u32 {
        self.0 as u32
    }

    pub fn owner(self) -> Triad {
        Triad::from_bits(self.bits() >> 6)
    }

    pub fn group(self) -> Triad {
        Triad::from_bits(self.bits() >> 3)
    }

    pub fn other(self) -> Triad {
        Triad::from_bits(self.bits())
    }

    /// Three-digit octal rendering, e.g. `644`.
    pub fn octal(self) -> String {
        format!("{:03o}", self.0)
    }
}

impl fmt::Display for PermissionMask {
    /// `rwxr-xr-x` style rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in [self.owner(), self.group(), self.other()] {
            let s = [
                if t.read { 'r' } else { '-' },
                if t.write { 'w' } else { '-' },
                if t.execute { 'x' } else { '-' },
            ];
            for c in s {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for PermissionMask {
    type Err = FsOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermissionMask::parse_octal(s)
    }
}

/// Read the permission bits of `dir/name`, following symlinks.
pub fn get_permissions(dir: &DirectoryContext, name: &str) -> FsResult<PermissionMask> {
    let path = dir.join_input(name);
    let meta = fs::metadata(&path).map_err(|e| FsOpError::io(&path, e))?;
    Ok(PermissionMask::from_metadata(&meta))
}

/// Replace the permission bits of `dir/name` with `mask`; bits are never merged.
pub fn set_permissions(dir: &DirectoryContext, name: &str, mask: PermissionMask) -> FsResult<()> {
    let path = dir.join_input(name);
    if !stat::exists(&path) {
        return Err(FsOpError::NotFound(path));
    }
    tracing::debug!(path = %path.display(), mode = %mask.octal(), "set permissions");
    apply_mask(&path, mask).map_err(|e| FsOpError::io(&path, e))
}

#[cfg(unix)]
fn apply_mask(path: &std::path::Path, mask: PermissionMask) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mask.bits()))
}

#[cfg(not(unix))]
fn apply_mask(path: &std::path::Path, mask: PermissionMask) -> std::io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(!mask.owner().write);
    fs::set_permissions(path, perms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_accepts_common_forms() {
        assert_eq!(PermissionMask::parse_octal("644").unwrap().bits(), 0o644);
        assert_eq!(PermissionMask::parse_octal(" 0755 ").unwrap().bits(), 0o755);
        assert_eq!("0o600".parse::<PermissionMask>().unwrap().bits(), 0o600);
        assert_eq!(PermissionMask::parse_octal("7").unwrap().bits(), 0o7);
    }

    #[test]
    fn parse_rejects_garbage_and_overflow() {
        for bad in ["", "   ", "abc", "648", "1000", "-1", "0o"] {
            assert!(
                matches!(PermissionMask::parse_octal(bad), Err(FsOpError::InvalidMask(_))),
                "expected InvalidMask for {:?}",
                bad
            );
        }
        assert!(PermissionMask::from_bits(0o1777).is_err());
        assert!(PermissionMask::from_bits(0o777).is_ok());
    }

    #[test]
    fn triads_and_rendering() {
        let m = PermissionMask::from_bits(0o754).unwrap();
        assert_eq!(m.owner(), Triad { read: true, write: true, execute: true });
        assert_eq!(m.group(), Triad { read: true, write: false, execute: true });
        assert_eq!(m.other(), Triad { read: true, write: false, execute: false });
        assert_eq!(m.to_string(), "rwxr-xr--");
        assert_eq!(m.octal(), "754");
        assert_eq!(PermissionMask::from_triads(m.owner(), m.group(), m.other()), m);
        assert_eq!(PermissionMask::default().to_string(), "---------");
    }

    #[cfg(unix)]
    #[test]
    fn set_then_get_round_trips() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("f"), "x").unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();

        set_permissions(&ctx, "f", PermissionMask::from_bits(0o640).unwrap()).unwrap();
        assert_eq!(get_permissions(&ctx, "f").unwrap().bits(), 0o640);
    }

    #[test]
    fn missing_target_is_not_found() {
        let td = tempdir().unwrap();
        let ctx = DirectoryContext::new(td.path()).unwrap();
        assert!(matches!(get_permissions(&ctx, "nope"), Err(FsOpError::NotFound(_))));
        assert!(matches!(
            set_permissions(&ctx, "nope", PermissionMask::from_bits(0o644).unwrap()),
            Err(FsOpError::NotFound(_))
        ));
    }
}
