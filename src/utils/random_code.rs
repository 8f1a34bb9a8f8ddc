use rand::Rng;

// 易读字符集，去掉 0/O/1/I 等易混淆字符
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成试卷编号，如 "QP-7F3K2A"
pub fn generate_paper_code() -> String {
    format!("QP-{}", random_code(6))
}

fn random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_code_shape() {
        let code = generate_paper_code();
        assert!(code.starts_with("QP-"));
        assert_eq!(code.len(), 9);
        assert!(
            code[3..]
                .bytes()
                .all(|b| CODE_CHARSET.contains(&b))
        );
    }

    #[test]
    fn test_no_ambiguous_characters() {
        for _ in 0..50 {
            let code = generate_paper_code();
            assert!(!code[3..].contains(['0', 'O', '1', 'I']));
        }
    }
}
