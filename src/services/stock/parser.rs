//! 行情文本解析
//!
//! 新浪格式（逐行）：`var hq_str_<代码>="字段,字段,...";`
//! 腾讯格式（单行）：`v_<代码>="字段~字段~...";`

use super::error::QuoteError;

/// 过短的行直接跳过（空行、结尾换行等）
const MIN_LINE_CHARS: usize = 10;

/// 新浪行情中解析成功的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinaLine<'a> {
    /// `str_` 之后、`=` 之前的代码，如 s_sh000001
    pub code: &'a str,
    pub fields: Vec<&'a str>,
}

/// 跳过某一行的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    MissingCode,
    MissingQuote,
}

/// 单行解析结果：要么解析成功，要么明确跳过
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    Parsed(SinaLine<'a>),
    Skipped(SkipReason),
}

/// 取第一对双引号之间的内容；只有一个引号时取其后全部内容
pub fn quoted_section(text: &str) -> Option<&str> {
    let start = text.find('"')? + 1;
    let rest = &text[start..];
    Some(match rest.find('"') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// 解析新浪行情的一行
pub fn parse_sina_line(line: &str) -> LineOutcome<'_> {
    if line.chars().count() < MIN_LINE_CHARS {
        return LineOutcome::Skipped(SkipReason::TooShort);
    }

    let head = line.split('=').next().unwrap_or_default();
    let code = match head.find("str_") {
        Some(pos) => &head[pos + 4..],
        None => return LineOutcome::Skipped(SkipReason::MissingCode),
    };

    match quoted_section(line) {
        Some(content) => LineOutcome::Parsed(SinaLine {
            code,
            fields: content.split(',').collect(),
        }),
        None => LineOutcome::Skipped(SkipReason::MissingQuote),
    }
}

/// 逐行解析新浪多行响应
pub fn parse_sina_lines(body: &str) -> impl Iterator<Item = LineOutcome<'_>> {
    body.split('\n').map(parse_sina_line)
}

/// 解析新浪单只证券响应
pub fn parse_sina_single(body: &str) -> Result<Vec<&str>, QuoteError> {
    if !body.contains("=\"") {
        return Err(QuoteError::NoData);
    }
    let content = quoted_section(body).ok_or(QuoteError::NoData)?;
    Ok(content.split(',').collect())
}

/// 解析腾讯单只证券响应
pub fn parse_tencent(body: &str) -> Result<Vec<&str>, QuoteError> {
    let content = quoted_section(body).ok_or(QuoteError::NoData)?;
    Ok(content.split('~').collect())
}

/// 按位置取字段，越界时返回字段不足错误
pub fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, QuoteError> {
    fields
        .get(index)
        .copied()
        .ok_or(QuoteError::InsufficientFields {
            required: index + 1,
            actual: fields.len(),
        })
}

/// 检查字段数量是否达到下限
pub fn require_fields(fields: &[&str], required: usize) -> Result<(), QuoteError> {
    if fields.len() < required {
        return Err(QuoteError::InsufficientFields {
            required,
            actual: fields.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_section() {
        assert_eq!(quoted_section(r#"v_sh600519="1~a~b";"#), Some("1~a~b"));
        assert_eq!(quoted_section(r#"x="";"#), Some(""));
        assert_eq!(quoted_section(r#"x="abc"#), Some("abc"));
        assert_eq!(quoted_section("no quotes"), None);
    }

    /// 测试解析新浪指数行
    #[test]
    fn test_parse_sina_line() {
        let line = r#"var hq_str_s_sh000001="上证指数,3000.00,-10.00,-0.33,1000,2000";"#;
        match parse_sina_line(line) {
            LineOutcome::Parsed(parsed) => {
                assert_eq!(parsed.code, "s_sh000001");
                assert_eq!(parsed.fields[0], "上证指数");
                assert_eq!(parsed.fields[1], "3000.00");
                assert_eq!(parsed.fields[3], "-0.33");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sina_line_skips() {
        assert_eq!(parse_sina_line(""), LineOutcome::Skipped(SkipReason::TooShort));
        assert_eq!(parse_sina_line("var x=\"\";"), LineOutcome::Skipped(SkipReason::TooShort));
        assert_eq!(
            parse_sina_line("var something_else=\"a,b\";"),
            LineOutcome::Skipped(SkipReason::MissingCode)
        );
        assert_eq!(
            parse_sina_line("var hq_str_sh600519=nothing"),
            LineOutcome::Skipped(SkipReason::MissingQuote)
        );
    }

    #[test]
    fn test_parse_sina_lines() {
        let body = "var hq_str_s_sh000001=\"上证指数,1,2,3\";\nvar hq_str_s_sz399001=\"深证成指,4,5,6\";\n";
        let outcomes: Vec<_> = parse_sina_lines(body).collect();
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], LineOutcome::Parsed(_)));
        assert!(matches!(outcomes[1], LineOutcome::Parsed(_)));
        assert_eq!(outcomes[2], LineOutcome::Skipped(SkipReason::TooShort));
    }

    #[test]
    fn test_parse_sina_single() {
        let fields = parse_sina_single(r#"var hq_str_sh600519="贵州茅台,1,2";"#).unwrap();
        assert_eq!(fields, vec!["贵州茅台", "1", "2"]);
        assert_eq!(parse_sina_single("FAILED"), Err(QuoteError::NoData));
    }

    #[test]
    fn test_parse_tencent() {
        let fields = parse_tencent(r#"v_sh600519="1~贵州茅台~600519~1700.00";"#).unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[1], "贵州茅台");
        assert_eq!(parse_tencent("v_pv_none_match=1;"), Err(QuoteError::NoData));
    }

    #[test]
    fn test_field_out_of_range() {
        let fields = vec!["a", "b"];
        assert_eq!(field(&fields, 1), Ok("b"));
        assert_eq!(
            field(&fields, 5),
            Err(QuoteError::InsufficientFields { required: 6, actual: 2 })
        );
        assert!(require_fields(&fields, 2).is_ok());
        assert!(require_fields(&fields, 3).is_err());
    }
}
