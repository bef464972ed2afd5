use std::path::PathBuf;

/// 已落盘的上传文件
///
/// 由上传处理器生成；调用方在后续步骤失败时负责删除，避免孤儿文件。
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    // 对外访问路径，如 /uploads/1713139200000-123456789.pdf
    pub url: String,
    // 磁盘上的文件名
    pub stored_name: String,
    // 磁盘完整路径
    pub path: PathBuf,
    // 客户端提供的原始文件名
    pub original_name: String,
    // 文件大小（字节）
    pub size: i64,
    // 声明的 MIME 类型，未声明时为空字符串
    pub content_type: String,
}
