use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 带文件锁的追加写入器
///
/// 每次写入前获取排他锁，写完刷盘后释放，多个进程共享同一个日志文件时日志行不会交错。
/// 记录器每条日志只调用一次 `write_all`，因此一行对应一次加锁。
pub struct LockedFileSink {
    file: Arc<File>,
    path: PathBuf,
}

impl LockedFileSink {
    /// 以追加模式打开文件，父目录不存在时自动创建
    pub fn new(path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "打开日志文件");

        Ok(Self {
            file: Arc::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for LockedFileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let file: &File = &self.file;
        FileExt::lock_exclusive(file)?;

        let result = (|| {
            let mut writer = file;
            writer.write_all(buf)?;
            writer.flush()
        })();

        // 无论写入是否成功都要释放锁
        let unlocked = FileExt::unlock(file);
        result?;
        unlocked?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // 每次 write 都已刷盘
        Ok(())
    }
}

impl Clone for LockedFileSink {
    fn clone(&self) -> Self {
        Self {
            file: Arc::clone(&self.file),
            path: self.path.clone(),
        }
    }
}
