use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Number of answer options per question: the correct answer plus three
/// distractors.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Zero-based parse index. Session state is keyed by this id rather
    /// than by object identity.
    pub id: usize,
    pub text: String,
    /// All answer options in storage order: the correct answer first,
    /// then the three distractors. Display order is shuffled elsewhere.
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug)]
pub enum ParseError {
    /// An empty or whitespace-only line where a question was expected.
    MissingQuestion { line: usize },
    /// The file ended before all four answers of a block were read.
    /// `index` is 1-based: 1 is the correct answer, 2-4 the distractors.
    MissingAnswer {
        line: usize,
        index: usize,
        question: String,
    },
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingQuestion { line } => {
                write!(f, "File format error at line {}: Missing question", line)
            }
            ParseError::MissingAnswer {
                line,
                index,
                question,
            } => write!(
                f,
                "File format error at line {}: Missing answer {} for question: {}",
                line, index, question
            ),
            ParseError::Io(e) => write!(f, "Error reading questions file: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Opens the file at `path` and parses every question block in it.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, ParseError> {
    log::info!("Loading questions from: {}", path.display());
    let file = File::open(path)?;
    parse_questions(BufReader::new(file))
}

/// Parses line-oriented question blocks:
///
/// ```text
/// <question text>
/// <correct answer>
/// <wrong answer 1>
/// <wrong answer 2>
/// <wrong answer 3>
/// ```
///
/// repeated with no separator lines. End of input before a question line
/// terminates normally; end of input inside a block is a structural error
/// and no partial question is produced for that block.
pub fn parse_questions<R: BufRead>(reader: R) -> Result<Vec<Question>, ParseError> {
    let mut questions = Vec::new();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next() {
        let text = line?;
        line_number += 1;
        if text.trim().is_empty() {
            return Err(ParseError::MissingQuestion { line: line_number });
        }

        let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
        for index in 1..=OPTIONS_PER_QUESTION {
            line_number += 1;
            match lines.next() {
                Some(answer) => options.push(answer?),
                None => {
                    return Err(ParseError::MissingAnswer {
                        line: line_number,
                        index,
                        question: text,
                    })
                }
            }
        }

        let correct_answer = options[0].clone();
        questions.push(Question {
            id: questions.len(),
            text,
            options,
            correct_answer,
        });
    }

    log::info!("Loaded {} questions", questions.len());
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Question>, ParseError> {
        parse_questions(input.as_bytes())
    }

    #[test]
    fn parses_well_formed_blocks() {
        let input = "2+2=?\n4\n3\n5\n22\nCapital of France?\nParis\nLondon\nRome\nBerlin\n";
        let questions = parse(input).unwrap();

        assert_eq!(questions.len(), 2);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, i);
            assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
            assert_eq!(q.options[0], q.correct_answer);
        }
        assert_eq!(questions[0].text, "2+2=?");
        assert_eq!(questions[0].correct_answer, "4");
        assert_eq!(questions[0].options, vec!["4", "3", "5", "22"]);
        assert_eq!(questions[1].correct_answer, "Paris");
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn blank_question_line_reports_line_number() {
        let input = "2+2=?\n4\n3\n5\n22\n\nParis\nLondon\nRome\nBerlin\n";
        match parse(input) {
            Err(ParseError::MissingQuestion { line }) => assert_eq!(line, 6),
            other => panic!("expected MissingQuestion, got {:?}", other),
        }
    }

    #[test]
    fn truncation_after_question_names_answer_one() {
        match parse("2+2=?\n") {
            Err(ParseError::MissingAnswer {
                line,
                index,
                question,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(index, 1);
                assert_eq!(question, "2+2=?");
            }
            other => panic!("expected MissingAnswer, got {:?}", other),
        }
    }

    #[test]
    fn truncation_mid_block_names_missing_index() {
        match parse("2+2=?\n4\n3\n") {
            Err(ParseError::MissingAnswer { line, index, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(index, 3);
            }
            other => panic!("expected MissingAnswer, got {:?}", other),
        }
    }

    #[test]
    fn truncated_block_fabricates_no_question() {
        // A good block followed by a broken one fails the whole parse.
        let input = "2+2=?\n4\n3\n5\n22\nCapital of France?\nParis\n";
        assert!(parse(input).is_err());
    }

    #[test]
    fn missing_file_reports_io_error() {
        match load_questions(Path::new("no-such-questions.txt")) {
            Err(ParseError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
