//! 试卷版面计算
//!
//! 纯几何层：维护页面游标、断页、贪心换行，产出与渲染后端无关的
//! 绘制指令。实际写 PDF 的工作在 mod.rs。

use crate::models::questions::entities::QuestionType;

// A4 纵向，单位 pt
pub const PAGE_WIDTH: f32 = 595.276;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 50.0;
// 页脚保留区，正文不得写入
pub const FOOTER_RESERVE: f32 = 30.0;

pub const BODY_SIZE: f32 = 11.0;
pub const OPTION_INDENT: f32 = 18.0;
pub const ANSWER_LINE_SPACING: f32 = 22.0;

// Helvetica 平均字宽系数（字号的倍数），贪心换行用
const AVG_CHAR_WIDTH: f32 = 0.5;

/// 单条绘制指令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: String,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

/// 一页的全部指令
#[derive(Debug, Default)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
}

/// 估算文本宽度（pt）
pub fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_WIDTH
}

/// 贪心换行：按估算宽度切分为多行
pub fn wrap_text(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let max_chars = ((max_width / (size * AVG_CHAR_WIDTH)) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }

        // 超长单词硬切
        while current.chars().count() > max_chars {
            let head: String = current.chars().take(max_chars).collect();
            let tail: String = current.chars().skip(max_chars).collect();
            lines.push(head);
            current = tail;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// 非客观题的作答横线数：至少 2 条，否则分值的一半向上取整
pub fn answer_line_count(question_type: QuestionType, marks: i32) -> usize {
    match question_type {
        QuestionType::Mcq => 0,
        _ => ((marks as f64 / 2.0).ceil() as usize).max(2),
    }
}

/// 版面游标：自上而下写，越过阈值即断页
pub struct LayoutEngine {
    pages: Vec<PageLayout>,
    cursor_y: f32,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            cursor_y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn bottom_threshold() -> f32 {
        MARGIN + FOOTER_RESERVE
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn cursor(&self) -> f32 {
        self.cursor_y
    }

    fn current_page(&mut self) -> &mut PageLayout {
        self.pages.last_mut().expect("at least one page")
    }

    /// 空间不足则开新页
    pub fn ensure_space(&mut self, needed: f32) {
        if self.cursor_y - needed < Self::bottom_threshold() {
            self.new_page();
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(PageLayout::default());
        self.cursor_y = PAGE_HEIGHT - MARGIN;
    }

    /// 垂直留白
    pub fn vspace(&mut self, amount: f32) {
        self.cursor_y -= amount;
    }

    /// 写一行文本，indent 相对左边距
    pub fn write_line(&mut self, text: &str, size: f32, bold: bool, indent: f32) {
        let line_height = size * 1.4;
        self.ensure_space(line_height);
        self.cursor_y -= line_height;
        let x = MARGIN + indent;
        let y = self.cursor_y;
        self.current_page().ops.push(DrawOp::Text {
            x,
            y,
            size,
            bold,
            text: text.to_string(),
        });
    }

    /// 写居中的一行
    pub fn write_centered(&mut self, text: &str, size: f32, bold: bool) {
        let line_height = size * 1.4;
        self.ensure_space(line_height);
        self.cursor_y -= line_height;
        let x = ((PAGE_WIDTH - estimate_width(text, size)) / 2.0).max(MARGIN);
        let y = self.cursor_y;
        self.current_page().ops.push(DrawOp::Text {
            x,
            y,
            size,
            bold,
            text: text.to_string(),
        });
    }

    /// 写自动换行的段落
    pub fn write_wrapped(&mut self, text: &str, size: f32, bold: bool, indent: f32) {
        let max_width = PAGE_WIDTH - 2.0 * MARGIN - indent;
        for line in wrap_text(text, size, max_width) {
            self.write_line(&line, size, bold, indent);
        }
    }

    /// 通栏分隔线
    pub fn horizontal_rule(&mut self) {
        self.ensure_space(10.0);
        self.cursor_y -= 10.0;
        let y = self.cursor_y;
        self.current_page().ops.push(DrawOp::Rule {
            x1: MARGIN,
            y1: y,
            x2: PAGE_WIDTH - MARGIN,
            y2: y,
        });
    }

    /// 作答横线（略窄于正文区）
    pub fn answer_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.ensure_space(ANSWER_LINE_SPACING);
            self.cursor_y -= ANSWER_LINE_SPACING;
            let y = self.cursor_y;
            self.current_page().ops.push(DrawOp::Rule {
                x1: MARGIN + OPTION_INDENT,
                y1: y,
                x2: PAGE_WIDTH - MARGIN,
                y2: y,
            });
        }
    }

    pub fn finish(self) -> Vec<PageLayout> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_line_heuristic() {
        // 最少 2 条
        assert_eq!(answer_line_count(QuestionType::ShortAnswer, 1), 2);
        assert_eq!(answer_line_count(QuestionType::ShortAnswer, 4), 2);
        // marks/2 向上取整
        assert_eq!(answer_line_count(QuestionType::ShortAnswer, 5), 3);
        assert_eq!(answer_line_count(QuestionType::LongAnswer, 10), 5);
        assert_eq!(answer_line_count(QuestionType::LongAnswer, 11), 6);
        // 客观题没有作答横线
        assert_eq!(answer_line_count(QuestionType::Mcq, 10), 0);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let lines = wrap_text(text, 11.0, 120.0);
        assert!(lines.len() > 1);
        let max_chars = (120.0 / (11.0 * 0.5)) as usize;
        for line in &lines {
            assert!(line.chars().count() <= max_chars, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_hard_splits_long_word() {
        let word = "a".repeat(200);
        let lines = wrap_text(&word, 11.0, 100.0);
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn test_wrap_empty_returns_single_blank_line() {
        assert_eq!(wrap_text("", 11.0, 100.0), vec![String::new()]);
    }

    #[test]
    fn test_cursor_descends() {
        let mut engine = LayoutEngine::new();
        let start = engine.cursor();
        engine.write_line("hello", BODY_SIZE, false, 0.0);
        assert!(engine.cursor() < start);
        assert_eq!(engine.page_count(), 1);
    }

    #[test]
    fn test_page_break_past_threshold() {
        let mut engine = LayoutEngine::new();
        // 写到断页为止
        while engine.page_count() == 1 {
            engine.write_line("filler line", BODY_SIZE, false, 0.0);
        }
        assert_eq!(engine.page_count(), 2);
        // 新页游标回到页顶
        assert!(engine.cursor() > PAGE_HEIGHT - MARGIN - 2.0 * BODY_SIZE * 1.4);
    }

    #[test]
    fn test_content_never_enters_footer_reserve() {
        let mut engine = LayoutEngine::new();
        for _ in 0..400 {
            engine.write_line("x", BODY_SIZE, false, 0.0);
        }
        for page in engine.finish() {
            for op in page.ops {
                let y = match op {
                    DrawOp::Text { y, .. } => y,
                    DrawOp::Rule { y1, .. } => y1,
                };
                assert!(y >= MARGIN, "op below bottom margin: {y}");
            }
        }
    }

    #[test]
    fn test_answer_lines_emit_rules() {
        let mut engine = LayoutEngine::new();
        engine.answer_lines(3);
        let pages = engine.finish();
        let rules = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
            .count();
        assert_eq!(rules, 3);
    }

    #[test]
    fn test_centered_text_is_centered() {
        let mut engine = LayoutEngine::new();
        engine.write_centered("Title", 16.0, true);
        let pages = engine.finish();
        match &pages[0].ops[0] {
            DrawOp::Text { x, .. } => {
                let expected = (PAGE_WIDTH - estimate_width("Title", 16.0)) / 2.0;
                assert!((x - expected).abs() < 0.01);
            }
            other => panic!("unexpected op: {other:?}"),
        }
    }
}
