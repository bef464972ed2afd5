/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容（至少包含开头几个字节）
/// * `extension` - 文件扩展名（包含点号，如 ".pdf"）
///
/// # Returns
/// * `true` - 魔术字节匹配
/// * `false` - 内容为空、不匹配或扩展名未知
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        // MS Office 旧格式 (OLE Compound Document)
        ".doc" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        // MS Office 新格式 (ZIP-based OOXML)
        ".docx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        // 纯文本不检查魔术字节
        ".txt" => true,
        _ => false,
    }
}
