//! Interactive quiz loop.
//!
//! Reads one command per line: an answer number, `r` to restart or `q` to
//! go back to the entry screen. While feedback is shown, `r` and `q` act at
//! once and cancel the pending advance; answers typed ahead are queued for
//! the next question.

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use green_config::GreenConfig;
use green_core::errors::CoreError;
use green_core::quiz::{Advance, QuizEngine, QuizEvent, QuizScheduler, QuizState, Selection};
use green_core::views::QuizSummary;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::QuizArgs;
use crate::output::render;

const INPUT_HELP: &str = "Tapez le numéro d'une réponse, r pour recommencer ou q pour quitter.";

/// Handle `greencheck quiz`.
pub async fn handle(
    args: &QuizArgs,
    config: &GreenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let delay = args
        .delay_ms
        .map_or_else(|| config.quiz.feedback_delay(), Duration::from_millis);
    tracing::debug!(delay_ms = delay.as_millis(), "starting quiz");

    let input = BufReader::new(tokio::io::stdin());
    let mut prompt = std::io::stderr();
    let mut out = std::io::stdout();
    let summaries = play(
        QuizEngine::green_coding(),
        delay,
        input,
        &mut prompt,
        &mut out,
        flags.format,
    )
    .await?;
    tracing::debug!(completed = summaries.len(), "quiz finished");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Answer(usize),
    Reset,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "r" | "reset" | "refaire" => Command::Reset,
        "q" | "quit" | "accueil" => Command::Quit,
        _ => line
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .map_or(Command::Unknown, Command::Answer),
    }
}

/// Run quiz rounds until `q` or end of input. Prompts go to `prompt`; each
/// completed round's summary is rendered to `out` in `format`.
async fn play<R, P, O>(
    engine: QuizEngine,
    delay: Duration,
    input: R,
    prompt: &mut P,
    out: &mut O,
    format: OutputFormat,
) -> anyhow::Result<Vec<QuizSummary>>
where
    R: AsyncBufRead + Unpin,
    P: Write,
    O: Write,
{
    let (mut quiz, mut events) = QuizScheduler::new(engine, delay);
    let mut lines = input.lines();
    let mut queued: VecDeque<String> = VecDeque::new();
    let mut input_closed = false;
    // Set once an answer is accepted, cleared by the matching advance event
    // or a restart. Every accepted answer yields exactly one event.
    let mut awaiting_advance = false;
    let mut summaries = Vec::new();

    write_question(&quiz, prompt).await?;

    loop {
        if awaiting_advance {
            tokio::select! {
                event = events.recv() => {
                    awaiting_advance = false;
                    match event {
                        Some(QuizEvent::Advanced(Advance::Next(_))) => {
                            write_question(&quiz, prompt).await?;
                        }
                        Some(QuizEvent::Advanced(Advance::Completed(_))) => {
                            if let Some(summary) = quiz.engine().lock().await.summary() {
                                write_summary(&summary, prompt, out, format)?;
                                summaries.push(summary);
                            }
                        }
                        Some(QuizEvent::Advanced(Advance::Ignored)) | None => {}
                    }
                }
                line = lines.next_line(), if !input_closed => {
                    match line? {
                        Some(line) => match parse_command(&line) {
                            Command::Reset => {
                                awaiting_advance = false;
                                restart(&mut quiz, &mut events, &mut queued, prompt).await?;
                            }
                            Command::Quit => break,
                            Command::Answer(_) | Command::Unknown => queued.push_back(line),
                        },
                        None => input_closed = true,
                    }
                }
            }
            continue;
        }

        let line = match queued.pop_front() {
            Some(line) => line,
            None => match lines.next_line().await? {
                Some(line) => line,
                None => break,
            },
        };

        let (state, _) = quiz.snapshot().await;
        match (state, parse_command(&line)) {
            (_, Command::Quit) => break,
            (_, Command::Reset) => restart(&mut quiz, &mut events, &mut queued, prompt).await?,
            (QuizState::AwaitingAnswer, Command::Answer(index)) => {
                match quiz.select_answer(index).await {
                    Ok(Selection::Accepted {
                        correct,
                        correct_index,
                    }) => {
                        awaiting_advance = true;
                        write_feedback(&quiz, correct, correct_index, prompt).await?;
                    }
                    Ok(Selection::Ignored) => {}
                    Err(CoreError::AnswerOutOfRange { available, .. }) => {
                        writeln!(prompt, "Choisissez une réponse entre 1 et {available}.")?;
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            (QuizState::Complete, _) => {
                writeln!(prompt, "Refaire le quiz (r) ou retour à l'accueil (q) ?")?;
            }
            _ => writeln!(prompt, "{INPUT_HELP}")?,
        }
    }

    // Dropping the scheduler cancels any advance still pending.
    drop(quiz);
    Ok(summaries)
}

async fn restart<P: Write>(
    quiz: &mut QuizScheduler,
    events: &mut UnboundedReceiver<QuizEvent>,
    queued: &mut VecDeque<String>,
    prompt: &mut P,
) -> anyhow::Result<()> {
    quiz.reset().await;
    // An advance that fired just before the reset may still be queued.
    while events.try_recv().is_ok() {}
    // Answers typed ahead belong to the discarded round.
    queued.clear();
    writeln!(prompt)?;
    write_question(quiz, prompt).await
}

async fn write_question<P: Write>(quiz: &QuizScheduler, prompt: &mut P) -> anyhow::Result<()> {
    let engine = quiz.engine();
    let engine = engine.lock().await;
    let Some(question) = engine.current_question() else {
        return Ok(());
    };

    writeln!(
        prompt,
        "Question {} / {} : {}",
        engine.session().current_question + 1,
        engine.total_questions(),
        question.prompt
    )?;
    for (index, answer) in question.answers.iter().enumerate() {
        writeln!(prompt, "  {}) {}", index + 1, answer.text)?;
    }
    Ok(())
}

async fn write_feedback<P: Write>(
    quiz: &QuizScheduler,
    correct: bool,
    correct_index: usize,
    prompt: &mut P,
) -> anyhow::Result<()> {
    if correct {
        writeln!(prompt, "Bonne réponse !")?;
        return Ok(());
    }

    let engine = quiz.engine();
    let engine = engine.lock().await;
    let expected = engine
        .current_question()
        .and_then(|question| question.answers.get(correct_index))
        .map_or("", |answer| answer.text.as_str());
    writeln!(prompt, "Mauvaise réponse. La bonne réponse était : {expected}")?;
    Ok(())
}

fn write_summary<P: Write, O: Write>(
    summary: &QuizSummary,
    prompt: &mut P,
    out: &mut O,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(prompt, "Quiz terminé !")?;
    writeln!(out, "{}", render(summary, format)?)?;
    writeln!(prompt, "Refaire le quiz (r) ou retour à l'accueil (q) ?")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use green_core::grade::Grade;
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    struct Transcript {
        summaries: Vec<QuizSummary>,
        prompt: String,
        out: String,
    }

    async fn run(script: &str) -> Transcript {
        run_with_delay(script, DELAY).await
    }

    async fn run_with_delay(script: &str, delay: Duration) -> Transcript {
        let mut prompt = Vec::new();
        let mut out = Vec::new();
        let summaries = play(
            QuizEngine::green_coding(),
            delay,
            script.as_bytes(),
            &mut prompt,
            &mut out,
            OutputFormat::Raw,
        )
        .await
        .expect("quiz should run");
        Transcript {
            summaries,
            prompt: String::from_utf8(prompt).expect("utf8"),
            out: String::from_utf8(out).expect("utf8"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_input_shows_help() {
        let transcript = run("deux\nq\n").await;
        assert!(transcript.prompt.contains(INPUT_HELP));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" 2 "), Command::Answer(1));
        assert_eq!(parse_command("R"), Command::Reset);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("0"), Command::Unknown);
        assert_eq!(parse_command("deux"), Command::Unknown);
    }

    #[tokio::test(start_paused = true)]
    async fn typed_ahead_answers_complete_the_quiz() {
        let transcript = run("2\n2\n2\n2\n2\n").await;

        assert_eq!(transcript.summaries.len(), 1);
        let summary = &transcript.summaries[0];
        assert_eq!(summary.score, 5);
        assert_eq!(summary.grade, Grade::A);

        let rendered: QuizSummary =
            serde_json::from_str(transcript.out.trim()).expect("summary json");
        assert_eq!(&rendered, summary);
        assert!(transcript.prompt.contains("Question 5 / 5"));
        assert!(transcript.prompt.contains("Quiz terminé !"));
    }

    #[tokio::test(start_paused = true)]
    async fn two_correct_answers_grade_c() {
        let transcript = run("2\n2\n1\n1\n1\n").await;
        assert_eq!(transcript.summaries[0].grade, Grade::C);
        assert!(transcript.prompt.contains("Mauvaise réponse"));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_during_feedback_restarts_from_first_question() {
        // Answer, then restart before the advance fires, then play it through.
        let transcript = run("2\nr\n1\n1\n1\n1\n1\n").await;

        assert_eq!(transcript.summaries.len(), 1);
        assert_eq!(transcript.summaries[0].score, 0);
        assert_eq!(transcript.summaries[0].grade, Grade::D);
        assert_eq!(transcript.prompt.matches("Question 1 / 5").count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn replay_after_completion() {
        let transcript = run("2\n2\n2\n2\n2\nr\n1\n1\n1\n1\n1\n").await;

        let grades: Vec<Grade> = transcript.summaries.iter().map(|s| s.grade).collect();
        assert_eq!(grades, vec![Grade::A, Grade::D]);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_stops_without_summary() {
        let transcript = run("2\nq\n").await;
        assert!(transcript.summaries.is_empty());
        assert!(transcript.out.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_answer_is_reported() {
        let transcript = run("9\nq\n").await;
        assert!(transcript.prompt.contains("entre 1 et 4"));
        assert!(transcript.summaries.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_discards_typed_ahead_answers() {
        // "1" is queued during feedback and must not answer the new round.
        let transcript = run("2\n1\nr\n2\n2\n2\n2\n2\n").await;

        assert_eq!(transcript.summaries.len(), 1);
        assert_eq!(transcript.summaries[0].score, 5);
        assert_eq!(transcript.summaries[0].grade, Grade::A);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn zero_delay_never_loses_the_summary() {
        for _ in 0..200 {
            let transcript = run_with_delay("2\n2\n2\n2\n2\n", Duration::ZERO).await;
            assert_eq!(transcript.summaries.len(), 1);
            assert_eq!(transcript.prompt.matches("Question ").count(), 5);
            assert_eq!(transcript.prompt.matches("Quiz terminé !").count(), 1);
        }
    }
}
