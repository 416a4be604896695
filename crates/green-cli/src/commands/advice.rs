use std::path::Path;

use green_core::views::{AdviceContext, AdviceView};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdviceArgs;
use crate::commands::shared::payload::read_analysis;
use crate::output::output;

/// Handle `greencheck advice`.
pub fn handle(args: &AdviceArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let context = build_context(args.grade.as_deref(), args.input.as_deref())?;
    let view = AdviceView::open(context.as_ref())?;
    output(&view, flags.format)
}

/// `--grade` overrides the payload's level; the payload still supplies its
/// advice list.
fn build_context(
    grade: Option<&str>,
    input: Option<&Path>,
) -> anyhow::Result<Option<AdviceContext>> {
    let mut context = input
        .map(read_analysis)
        .transpose()?
        .map(|analysis| AdviceContext::from(&analysis));

    if let Some(grade) = grade {
        let context = context.get_or_insert_with(AdviceContext::default);
        context.level_code = grade.to_string();
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use green_core::advice::AdviceRepository;
    use green_core::grade::Grade;
    use green_core::views::{AdviceView, Redirect};
    use pretty_assertions::assert_eq;

    use super::build_context;

    #[test]
    fn grade_only_uses_builtin_table() {
        let context = build_context(Some("e"), None).expect("context");
        let view = AdviceView::open(context.as_ref()).expect("view");
        assert_eq!(view.grade, Grade::E);
        assert!(!view.provided);
        assert_eq!(view.advice, AdviceRepository::resolve(Grade::E, None));
    }

    #[test]
    fn unknown_grade_uses_c_table() {
        let context = build_context(Some("Z"), None).expect("context");
        let view = AdviceView::open(context.as_ref()).expect("view");
        assert_eq!(view.grade, Grade::C);
    }

    #[test]
    fn nothing_given_redirects() {
        let context = build_context(None, None).expect("context");
        assert_eq!(
            AdviceView::open(context.as_ref()),
            Err(Redirect::Home { view: "advice" })
        );
    }

    #[test]
    fn payload_advice_survives_grade_override() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"niveau":"B","message":"","conseils":"un;deux"}}"#).expect("write");

        let context = build_context(Some("A"), Some(file.path())).expect("context");
        let view = AdviceView::open(context.as_ref()).expect("view");

        assert_eq!(view.grade, Grade::A);
        assert!(view.provided);
        assert_eq!(view.advice, vec!["un".to_string(), "deux".to_string()]);
    }
}
