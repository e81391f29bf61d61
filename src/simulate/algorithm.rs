/// Which classifier path a run exercises. "fastest" is accepted for
/// compatibility and resolves to the same path as "fast"; the variants are
/// not behaviorally divergent. "none" deals without classifying, which
/// isolates dealer throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Slow,
    Fast,
    Fastest,
    None,
}

impl std::str::FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Self::Slow),
            "fast" => Ok(Self::Fast),
            "fastest" => Ok(Self::Fastest),
            "none" => Ok(Self::None),
            other => Err(format!("unrecognized algorithm: {}", other)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Slow => "slow",
                Self::Fast => "fast",
                Self::Fastest => "fastest",
                Self::None => "none",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert!("slow".parse() == Ok(Algorithm::Slow));
        assert!("fastest".parse() == Ok(Algorithm::Fastest));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!("quick".parse::<Algorithm>().is_err());
    }
}
