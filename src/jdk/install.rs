use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use crate::error::{Error, Result};

const DOWNLOAD_BASE: &str = "https://github.com/AdoptOpenJDK/openjdk8-binaries/releases/download/jdk8u232-b09";
const JDK_DIR_NAME: &str = "jdk8u232-b09";

/// Puts a JDK into a folder and reports where its home ended up.
pub trait JdkInstaller {
    fn install(&self, target_dir: &Path) -> Result<PathBuf>;
}

/// Release archive for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JdkArchive {
    pub file_name: &'static str,
    pub zipped: bool,
}

impl JdkArchive {
    pub fn for_os(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(JdkArchive { file_name: "OpenJDK8U-jdk_x64_linux_hotspot_8u232b09.tar.gz", zipped: false }),
            "macos" => Some(JdkArchive { file_name: "OpenJDK8U-jdk_x64_mac_hotspot_8u232b09.tar.gz", zipped: false }),
            "windows" => Some(JdkArchive { file_name: "OpenJDK8U-jdk_x86-32_windows_hotspot_8u232b09.zip", zipped: true }),
            _ => None,
        }
    }

    pub fn url(&self) -> String {
        format!("{DOWNLOAD_BASE}/{}", self.file_name)
    }
}

/// Downloads the pinned AdoptOpenJDK 8 build and unpacks it with the system tools.
#[derive(Debug, Clone)]
pub struct AdoptOpenJdkInstaller {
    pub timeout: Duration,
}

impl Default for AdoptOpenJdkInstaller {
    fn default() -> Self {
        AdoptOpenJdkInstaller { timeout: Duration::from_secs(600) }
    }
}

impl JdkInstaller for AdoptOpenJdkInstaller {
    fn install(&self, target_dir: &Path) -> Result<PathBuf> {
        let archive = JdkArchive::for_os(std::env::consts::OS)
            .ok_or_else(|| Error::Install(format!("unsupported platform: {}", std::env::consts::OS)))?;
        let dest = target_dir.join(archive.file_name);

        println!("Downloading JDK 8 to {}", target_dir.display());
        download(&archive.url(), &dest, self.timeout).inspect_err(|_| {
            let _ = remove_archive(&dest);
        })?;
        extract(&archive, &dest, target_dir)?;

        Ok(target_dir.join(JDK_DIR_NAME))
    }
}

/// Unpack `file` into `into`, then drop the archive whether or not unpacking worked.
fn extract(archive: &JdkArchive, file: &Path, into: &Path) -> Result<()> {
    let unpacked = unpack(archive, file, into);
    let removed = remove_archive(file);
    unpacked?;
    removed
}

fn remove_archive(file: &Path) -> Result<()> {
    match fs::remove_file(file) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(file, e)),
    }
}

fn download(url: &str, dest: &Path, timeout: Duration) -> Result<()> {
    tracing::info!("downloading {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Install(e.to_string()))?;
    let mut resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Install(format!("{url}: {e}")))?;
    let mut file = fs::File::create(dest).map_err(|e| Error::io(dest, e))?;
    resp.copy_to(&mut file).map_err(|e| Error::Install(format!("{url}: {e}")))?;
    Ok(())
}

fn unpack(archive: &JdkArchive, file: &Path, into: &Path) -> Result<()> {
    let mut cmd = if archive.zipped {
        let mut c = Command::new("unzip");
        c.arg("-q").arg(file).arg("-d").arg(into);
        c
    } else {
        let mut c = Command::new("tar");
        c.arg("-xzf").arg(file).arg("-C").arg(into);
        c
    };
    let status = cmd
        .status()
        .map_err(|e| Error::Install(format!("cannot run {:?}: {e}", cmd.get_program())))?;
    if !status.success() {
        return Err(Error::Install(format!("{:?} exited with status {status}", cmd.get_program())));
    }
    Ok(())
}
