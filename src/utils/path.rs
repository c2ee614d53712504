/// 获取以正斜杠分隔的对象键的最后一段
///
/// 对象键总是使用正斜杠(/)作为分隔符，与操作系统无关，因此这里不使用 `std::path::Path`。
/// 以斜杠结尾的键返回空字符串。
///
/// # 参数
///
/// * `key` - 对象键，例如 `input/data.csv`
///
/// # 返回值
///
/// 键的最后一段
///
/// # 示例
///
/// ```
/// use s3_relocator::utils::path::basename;
///
/// assert_eq!(basename("input/data.csv"), "data.csv");
/// assert_eq!(basename("a/b/c/file.txt"), "file.txt");
/// assert_eq!(basename("data.csv"), "data.csv");
/// assert_eq!(basename("folder/"), "");
/// ```
pub fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// 按正斜杠拆分对象键，对每一段进行百分号编码后重新拼接
///
/// 斜杠本身保持不变，适用于 `x-amz-copy-source` 这类要求 URL 编码的请求头。
///
/// # 示例
///
/// ```
/// use s3_relocator::utils::path::encode_key;
///
/// assert_eq!(encode_key("input/data.csv"), "input/data.csv");
/// assert_eq!(encode_key("my folder/a+b.txt"), "my%20folder/a%2Bb.txt");
/// ```
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
