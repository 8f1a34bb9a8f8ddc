//! 试卷 PDF 渲染
//!
//! 版面计算在 layout.rs；这里把绘制指令写成 PDF 文档：所有页先缓冲，
//! 内容排完后统一补印 "Page X of Y" 页脚，再序列化。

pub mod layout;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::errors::{EduSystemError, Result};
use crate::models::question_papers::entities::{PaperQuestion, QuestionPaper};
use layout::{
    BODY_SIZE, DrawOp, LayoutEngine, MARGIN, OPTION_INDENT, PAGE_HEIGHT, PAGE_WIDTH, PageLayout,
    answer_line_count, estimate_width,
};

pub struct PdfGenerationService;

/// 渲染上下文：页面上需要的展示名称
pub struct PaperRenderContext<'a> {
    pub school_name: &'a str,
    pub subject_name: &'a str,
    pub class_name: &'a str,
}

impl PdfGenerationService {
    /// 把试卷渲染为 PDF 字节
    pub fn render_paper(
        paper: &QuestionPaper,
        questions: &[PaperQuestion],
        ctx: &PaperRenderContext<'_>,
    ) -> Result<Vec<u8>> {
        if questions.is_empty() {
            return Err(EduSystemError::pdf_render("试卷没有题目，无法渲染"));
        }

        let mut engine = LayoutEngine::new();

        render_header(&mut engine, paper, ctx);
        render_instructions(&mut engine, paper);
        for pq in questions {
            render_question(&mut engine, pq);
        }

        let mut pages = engine.finish();
        stamp_footers(&mut pages);

        Ok(write_document(&pages))
    }
}

/// 页眉区：校名、标题、科目与班级、分数与时长
fn render_header(engine: &mut LayoutEngine, paper: &QuestionPaper, ctx: &PaperRenderContext<'_>) {
    engine.write_centered(ctx.school_name, 16.0, true);
    engine.vspace(4.0);
    engine.write_centered(&paper.title, 13.0, true);
    engine.vspace(2.0);
    engine.write_centered(
        &format!(
            "{} | Class: {} | Paper: {}",
            ctx.subject_name, ctx.class_name, paper.paper_code
        ),
        10.0,
        false,
    );
    engine.write_centered(
        &format!(
            "Total Marks: {} | Duration: {} minutes",
            paper.total_marks, paper.duration_minutes
        ),
        10.0,
        false,
    );
    engine.horizontal_rule();
    engine.vspace(6.0);
}

/// 考试说明块
fn render_instructions(engine: &mut LayoutEngine, paper: &QuestionPaper) {
    let Some(ref instructions) = paper.instructions else {
        return;
    };
    if instructions.trim().is_empty() {
        return;
    }

    engine.write_line("Instructions:", BODY_SIZE, true, 0.0);
    engine.write_wrapped(instructions, BODY_SIZE, false, OPTION_INDENT);
    engine.vspace(8.0);
}

/// 单题块：题干、选项、作答横线
fn render_question(engine: &mut LayoutEngine, pq: &PaperQuestion) {
    engine.vspace(6.0);

    let marks_label = if pq.marks == 1 { "mark" } else { "marks" };
    engine.write_wrapped(
        &format!(
            "{}. {} ({} {marks_label})",
            pq.position, pq.question.question_text, pq.marks
        ),
        BODY_SIZE,
        false,
        0.0,
    );

    for (idx, option) in pq.question.options.iter().enumerate() {
        let label = (b'A' + idx as u8) as char;
        engine.write_wrapped(&format!("{label}. {option}"), BODY_SIZE, false, OPTION_INDENT);
    }

    engine.answer_lines(answer_line_count(pq.question.question_type, pq.marks));
}

/// 页脚补印：所有内容排完后才知道总页数
fn stamp_footers(pages: &mut [PageLayout]) {
    let total = pages.len();
    for (idx, page) in pages.iter_mut().enumerate() {
        let text = format!("Page {} of {}", idx + 1, total);
        let x = (PAGE_WIDTH - estimate_width(&text, 9.0)) / 2.0;
        page.ops.push(DrawOp::Text {
            x,
            y: MARGIN - 18.0,
            size: 9.0,
            bold: false,
            text,
        });
    }
}

/// Helvetica 是 Latin-1 字体，超出范围的字符替换为 '?'
fn sanitize_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

/// 把缓冲好的页面写成 PDF 文档
fn write_document(pages: &[PageLayout]) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_font_id = Ref::new(3);
    let bold_font_id = Ref::new(4);

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.type1_font(regular_font_id)
        .base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_font_id)
        .base_font(Name(b"Helvetica-Bold"));

    let mut next_id = 5;
    let mut page_ids = Vec::with_capacity(pages.len());

    for page in pages {
        let page_id = Ref::new(next_id);
        let content_id = Ref::new(next_id + 1);
        next_id += 2;
        page_ids.push(page_id);

        let mut content = Content::new();
        for op in &page.ops {
            match op {
                DrawOp::Text {
                    x,
                    y,
                    size,
                    bold,
                    text,
                } => {
                    let font = if *bold { b"F2" } else { b"F1" };
                    content.begin_text();
                    content.set_font(Name(font), *size);
                    content.next_line(*x, *y);
                    content.show(Str(&sanitize_text(text)));
                    content.end_text();
                }
                DrawOp::Rule { x1, y1, x2, y2 } => {
                    content.set_line_width(0.75);
                    content.move_to(*x1, *y1);
                    content.line_to(*x2, *y2);
                    content.stroke();
                }
            }
        }
        pdf.stream(content_id, &content.finish());

        let mut page_writer = pdf.page(page_id);
        page_writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page_writer.parent(page_tree_id);
        page_writer.contents(content_id);
        {
            let mut resources = page_writer.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), regular_font_id);
            fonts.pair(Name(b"F2"), bold_font_id);
        }
        page_writer.finish();
    }

    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question_papers::entities::{BloomsDistribution, PaperStatus};
    use crate::models::questions::entities::{BloomsLevel, Difficulty, Question, QuestionType};

    fn sample_paper() -> QuestionPaper {
        QuestionPaper {
            id: 1,
            school_id: 1,
            subject_id: 1,
            class_id: 1,
            exam_id: None,
            paper_code: "QP-TEST01".to_string(),
            title: "Midterm Examination".to_string(),
            instructions: Some("Answer all questions. Write clearly.".to_string()),
            total_marks: 100,
            duration_minutes: 90,
            blooms_distribution: BloomsDistribution {
                remember: 20,
                understand: 30,
                apply: 30,
                analyze: 10,
                evaluate: 5,
                create: 5,
            },
            status: PaperStatus::Generated,
            created_by: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn sample_question(position: i32, question_type: QuestionType, marks: i32) -> PaperQuestion {
        PaperQuestion {
            position,
            marks,
            question: Question {
                id: position as i64,
                school_id: 1,
                subject_id: 1,
                question_text: format!("Describe the process covered in topic {position}."),
                question_type,
                options: if question_type == QuestionType::Mcq {
                    vec!["first".into(), "second".into(), "third".into(), "fourth".into()]
                } else {
                    vec![]
                },
                correct_answer: None,
                marks,
                blooms_level: BloomsLevel::Understand,
                difficulty: Difficulty::Medium,
                ai_generated: false,
                created_by: 1,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
        }
    }

    fn ctx() -> PaperRenderContext<'static> {
        PaperRenderContext {
            school_name: "Greenfield High School",
            subject_name: "Mathematics",
            class_name: "Grade 9-A",
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let questions = vec![
            sample_question(1, QuestionType::Mcq, 5),
            sample_question(2, QuestionType::ShortAnswer, 5),
            sample_question(3, QuestionType::LongAnswer, 10),
        ];
        let bytes =
            PdfGenerationService::render_paper(&sample_paper(), &questions, &ctx()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_rejects_empty_paper() {
        assert!(PdfGenerationService::render_paper(&sample_paper(), &[], &ctx()).is_err());
    }

    #[test]
    fn test_long_paper_spans_multiple_pages_and_stamps_footers() {
        let questions: Vec<PaperQuestion> = (1..=30)
            .map(|i| sample_question(i, QuestionType::LongAnswer, 10))
            .collect();

        // 同样的内容走一遍版面计算，确认确实断页
        let mut engine = LayoutEngine::new();
        render_header(&mut engine, &sample_paper(), &ctx());
        render_instructions(&mut engine, &sample_paper());
        for pq in &questions {
            render_question(&mut engine, pq);
        }
        let mut pages = engine.finish();
        assert!(pages.len() > 1, "30 long questions should not fit one page");

        stamp_footers(&mut pages);
        let total = pages.len();
        for (idx, page) in pages.iter().enumerate() {
            let footer = format!("Page {} of {}", idx + 1, total);
            assert!(
                page.ops.iter().any(|op| matches!(
                    op,
                    DrawOp::Text { text, .. } if text == &footer
                )),
                "page {idx} missing footer"
            );
        }

        let bytes =
            PdfGenerationService::render_paper(&sample_paper(), &questions, &ctx()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_sanitize_replaces_non_latin1() {
        assert_eq!(sanitize_text("abc"), b"abc".to_vec());
        assert_eq!(sanitize_text("数学 abc"), b"?? abc".to_vec());
    }
}
