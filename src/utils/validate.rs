use once_cell::sync::Lazy;
use regex::Regex;

// 单个路径分量：字母数字开头，仅含字母数字、点、下划线、连字符
static FILE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,254}$").expect("Invalid file name regex")
});

/// 检查是否为可安全拼接到上传目录下的文件名
pub fn is_safe_file_name(name: &str) -> bool {
    FILE_NAME_RE.is_match(name) && !name.contains("..")
}
