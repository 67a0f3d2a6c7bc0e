use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

/// The site owner's public profile, returned verbatim by `GET /api/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub social: SocialLinks,
}

impl Profile {
    pub fn owner() -> Self {
        Self {
            name: "Theophilus Alexander Elvan".to_string(),
            title: "Full Stack Developer".to_string(),
            email: "theophilus.a.e.k@gmail.com".to_string(),
            location: "Indonesia".to_string(),
            social: SocialLinks {
                github: "https://github.com/TheophilusAE".to_string(),
                linkedin: "https://www.linkedin.com/in/theophilus-alexander-elvan-94a6a8291"
                    .to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_profile_shape() {
        let json = serde_json::to_value(Profile::owner()).unwrap();
        for key in ["name", "title", "email", "location"] {
            assert!(!json[key].as_str().unwrap().is_empty(), "{key} is empty");
        }
        assert!(json["social"]["github"].as_str().unwrap().starts_with("https://"));
        assert!(json["social"]["linkedin"].as_str().unwrap().starts_with("https://"));
    }
}
