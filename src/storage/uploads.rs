//! 上传文件的磁盘存储
//!
//! 负责扩展名白名单、文件命名、落盘、删除以及对外路径与磁盘路径的互相转换。
//! 数据库中只保存对外路径（如 `/uploads/<name>`）。

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, warn};

use crate::config::UploadConfig;
use crate::errors::{PortalError, Result};
use crate::models::files::entities::StoredUpload;
use crate::utils::is_safe_file_name;

/// 上传文件的对外访问前缀
pub const PUBLIC_PATH: &str = "/uploads";

// 生成的文件名冲突时的最大重试次数
const MAX_NAME_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_size: usize,
    allowed_types: Vec<String>,
}

impl UploadStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            max_size: config.max_size,
            allowed_types: config
                .allowed_types
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 提取并校验扩展名（小写，含点号）
    pub fn check_extension(&self, original_name: &str) -> Result<String> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        if extension.is_empty() || !self.allowed_types.contains(&extension) {
            return Err(PortalError::validation(format!(
                "File type not allowed. Allowed types: {}",
                self.allowed_types.join(", ")
            )));
        }
        Ok(extension)
    }

    /// 生成存储文件名：`<毫秒时间戳>-<随机数><扩展名>`
    fn generate_name(extension: &str) -> String {
        let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
        format!(
            "{}-{}{}",
            chrono::Utc::now().timestamp_millis(),
            suffix,
            extension
        )
    }

    /// 写入已通过校验的文件内容
    pub fn save(
        &self,
        original_name: &str,
        extension: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<StoredUpload> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            PortalError::file_operation(format!(
                "创建上传目录失败 {}: {e}",
                self.dir.display()
            ))
        })?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let stored_name = Self::generate_name(extension);
            let path = self.dir.join(&stored_name);

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("Upload name collision on {}, retrying", stored_name);
                    continue;
                }
                Err(e) => {
                    return Err(PortalError::file_operation(format!("文件创建失败: {e}")));
                }
            };

            if let Err(e) = file.write_all(data).and_then(|_| file.flush()) {
                let _ = fs::remove_file(&path);
                return Err(PortalError::file_operation(format!("文件写入失败: {e}")));
            }

            return Ok(StoredUpload {
                url: format!("{PUBLIC_PATH}/{stored_name}"),
                stored_name,
                path,
                original_name: original_name.to_string(),
                size: data.len() as i64,
                content_type: content_type.to_string(),
            });
        }

        Err(PortalError::file_operation(
            "无法生成唯一的文件名，请稍后重试",
        ))
    }

    /// 文件名转换为磁盘路径，非法文件名返回 None
    pub fn resolve_name(&self, name: &str) -> Option<PathBuf> {
        is_safe_file_name(name).then(|| self.dir.join(name))
    }

    /// 对外路径转换为磁盘路径
    pub fn resolve_url(&self, url: &str) -> Option<PathBuf> {
        let name = url
            .strip_prefix(PUBLIC_PATH)?
            .strip_prefix('/')?;
        self.resolve_name(name)
    }

    /// 丢弃一次未被引用的上传，失败只记录日志
    pub fn discard(&self, upload: &StoredUpload) {
        match fs::remove_file(&upload.path) {
            Ok(()) => debug!("Discarded upload {}", upload.stored_name),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                path = %upload.path.display(),
                "Failed to discard upload, file is orphaned: {e}"
            ),
        }
    }

    /// 删除对外路径指向的文件
    ///
    /// 返回是否实际删除了文件；路径不属于上传目录或文件不存在时返回 `Ok(false)`。
    pub fn remove_url(&self, url: &str) -> Result<bool> {
        let Some(path) = self.resolve_url(url) else {
            warn!("Refusing to remove file outside upload directory: {}", url);
            return Ok(false);
        };

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PortalError::file_operation(format!(
                "删除文件失败 {}: {e}",
                path.display()
            ))),
        }
    }
}

/// 根据扩展名推断响应的 Content-Type
pub fn content_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
