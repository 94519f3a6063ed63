use super::{
    models::{NewGameResult, DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LEN, MIN_SNAKE_LENGTH},
    types::ScoreSubmission,
    ScoreError,
};

pub fn validate_player_name(name: Option<&str>) -> Result<String, ScoreError> {
    let name = match name {
        Some(name) => name,
        None => return Ok(DEFAULT_PLAYER_NAME.to_string()),
    };

    if name.is_empty() {
        return Err(ScoreError::Validation(
            "player_name must not be empty".into(),
        ));
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(ScoreError::Validation(format!(
            "player_name must be at most {} characters",
            MAX_PLAYER_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

pub fn validate_score(score: i32) -> Result<(), ScoreError> {
    if score < 0 {
        Err(ScoreError::Validation("score cannot be negative".into()))
    } else {
        Ok(())
    }
}

pub fn validate_snake_length(snake_length: i32) -> Result<(), ScoreError> {
    if snake_length < MIN_SNAKE_LENGTH {
        Err(ScoreError::Validation(format!(
            "snake_length must be at least {}",
            MIN_SNAKE_LENGTH
        )))
    } else {
        Ok(())
    }
}

pub fn validate_duration(duration_seconds: i32) -> Result<(), ScoreError> {
    if duration_seconds < 0 {
        Err(ScoreError::Validation(
            "duration_seconds cannot be negative".into(),
        ))
    } else {
        Ok(())
    }
}

impl ScoreSubmission {
    /// Checks every field bound and applies the default player name
    pub fn validate(&self) -> Result<NewGameResult, ScoreError> {
        let player_name = validate_player_name(self.player_name.as_deref())?;
        validate_score(self.score)?;
        validate_snake_length(self.snake_length)?;
        validate_duration(self.duration_seconds)?;

        Ok(NewGameResult::new(
            player_name,
            self.score,
            self.snake_length,
            self.duration_seconds,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn submission(name: Option<&str>, score: i32, len: i32, dur: i32) -> ScoreSubmission {
        ScoreSubmission {
            player_name: name.map(str::to_string),
            score,
            snake_length: len,
            duration_seconds: dur,
        }
    }

    #[test]
    fn test_valid_submission() {
        let validated = submission(Some("Valeria"), 150, 16, 45).validate().unwrap();

        assert_eq!(validated.player_name(), "Valeria");
        assert_eq!(validated.score(), 150);
        assert_eq!(validated.snake_length(), 16);
        assert_eq!(validated.duration_seconds(), 45);
    }

    #[test]
    fn test_missing_player_name_defaults() {
        let validated = submission(None, 0, 1, 0).validate().unwrap();
        assert_eq!(validated.player_name(), "Player");
    }

    #[test]
    fn test_player_name_is_stored_as_sent() {
        let validated = submission(Some(" Ann "), 5, 2, 3).validate().unwrap();
        assert_eq!(validated.player_name(), " Ann ");

        let validated = submission(Some("   "), 5, 2, 3).validate().unwrap();
        assert_eq!(validated.player_name(), "   ");
    }

    #[test]
    fn test_player_name_length_includes_whitespace() {
        let name = format!(" {} ", "x".repeat(49));
        assert!(matches!(
            submission(Some(&name), 5, 2, 3).validate(),
            Err(ScoreError::Validation(_))
        ));
    }

    #[test]
    fn test_player_name_length_counts_characters() {
        // 50 two-byte characters is still within bounds
        let name = "ж".repeat(50);
        let validated = submission(Some(&name), 5, 2, 3).validate().unwrap();
        assert_eq!(validated.player_name(), name);
    }

    #[rstest]
    #[case(submission(Some(""), 10, 2, 5))] // empty name
    #[case(submission(Some(&"x".repeat(51)), 10, 2, 5))] // name too long
    #[case(submission(None, -1, 2, 5))] // negative score
    #[case(submission(None, 10, 0, 5))] // snake shorter than one segment
    #[case(submission(None, 10, -3, 5))] // negative snake length
    #[case(submission(None, 10, 2, -1))] // negative duration
    fn test_invalid_submissions(#[case] input: ScoreSubmission) {
        let result = input.validate();
        assert!(matches!(result, Err(ScoreError::Validation(_))));
    }

    #[rstest]
    #[case(0, 1, 0)]
    #[case(1, 1, 1)]
    #[case(i32::MAX, i32::MAX, i32::MAX)]
    fn test_boundary_values_accepted(#[case] score: i32, #[case] len: i32, #[case] dur: i32) {
        assert!(submission(Some("edge"), score, len, dur).validate().is_ok());
    }
}
