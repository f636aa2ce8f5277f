//! Source-type inference for applications and compose stacks.
//!
//! Dokploy needs a `sourceType` for every application and compose stack. The
//! provider derives it from whichever optional source field the plan sets,
//! using a fixed priority table per family. Adding a new git provider means
//! adding a row, not another branch.

use serde::Deserialize;

/// Plan-time state of an optional string attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum FieldValue {
    /// Not configured
    #[default]
    Unset,
    /// Configured but not resolvable until apply (depends on another resource)
    Pending,
    /// Concrete value, possibly empty
    Value(String),
}

impl FieldValue {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// The concrete, non-empty value, if any.
    pub fn as_concrete(&self) -> Option<&str> {
        match self {
            Self::Value(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.as_concrete().is_some()
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(Self::Value).unwrap_or_default()
    }
}

/// Optional attributes that can select a source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceField {
    DockerImage,
    ComposeFileContent,
    CustomGitUrl,
    GitlabId,
    BitbucketId,
    GiteaId,
}

impl SourceField {
    pub const ALL: [SourceField; 6] = [
        SourceField::DockerImage,
        SourceField::ComposeFileContent,
        SourceField::CustomGitUrl,
        SourceField::GitlabId,
        SourceField::BitbucketId,
        SourceField::GiteaId,
    ];

    /// Attribute name as it appears in configuration
    pub fn name(&self) -> &'static str {
        match self {
            SourceField::DockerImage => "docker_image",
            SourceField::ComposeFileContent => "compose_file_content",
            SourceField::CustomGitUrl => "custom_git_url",
            SourceField::GitlabId => "gitlab_id",
            SourceField::BitbucketId => "bitbucket_id",
            SourceField::GiteaId => "gitea_id",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl std::fmt::Display for SourceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Source attributes of a pending application or compose plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceFields {
    pub docker_image: FieldValue,
    pub compose_file_content: FieldValue,
    pub custom_git_url: FieldValue,
    pub gitlab_id: FieldValue,
    pub bitbucket_id: FieldValue,
    pub gitea_id: FieldValue,
}

impl SourceFields {
    pub fn get(&self, field: SourceField) -> &FieldValue {
        match field {
            SourceField::DockerImage => &self.docker_image,
            SourceField::ComposeFileContent => &self.compose_file_content,
            SourceField::CustomGitUrl => &self.custom_git_url,
            SourceField::GitlabId => &self.gitlab_id,
            SourceField::BitbucketId => &self.bitbucket_id,
            SourceField::GiteaId => &self.gitea_id,
        }
    }

    pub fn set(&mut self, field: SourceField, value: FieldValue) {
        let slot = match field {
            SourceField::DockerImage => &mut self.docker_image,
            SourceField::ComposeFileContent => &mut self.compose_file_content,
            SourceField::CustomGitUrl => &mut self.custom_git_url,
            SourceField::GitlabId => &mut self.gitlab_id,
            SourceField::BitbucketId => &mut self.bitbucket_id,
            SourceField::GiteaId => &mut self.gitea_id,
        };
        *slot = value;
    }

    pub fn with(mut self, field: SourceField, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }
}

/// One row of a priority table.
#[derive(Debug, Clone, Copy)]
pub struct SourceRule {
    pub field: SourceField,
    pub label: &'static str,
}

const fn rule(field: SourceField, label: &'static str) -> SourceRule {
    SourceRule { field, label }
}

/// Priority table for one resource family.
#[derive(Debug)]
pub struct SourceFamily {
    pub name: &'static str,
    pub rules: &'static [SourceRule],
    pub default_label: &'static str,
}

pub static APPLICATION: SourceFamily = SourceFamily {
    name: "application",
    rules: &[
        rule(SourceField::DockerImage, "docker"),
        rule(SourceField::CustomGitUrl, "git"),
        rule(SourceField::GitlabId, "gitlab"),
        rule(SourceField::BitbucketId, "bitbucket"),
        rule(SourceField::GiteaId, "gitea"),
    ],
    default_label: "github",
};

pub static COMPOSE: SourceFamily = SourceFamily {
    name: "compose",
    rules: &[
        rule(SourceField::ComposeFileContent, "raw"),
        rule(SourceField::CustomGitUrl, "git"),
        rule(SourceField::GitlabId, "gitlab"),
        rule(SourceField::BitbucketId, "bitbucket"),
        rule(SourceField::GiteaId, "gitea"),
    ],
    default_label: "github",
};

impl SourceFamily {
    pub fn by_name(name: &str) -> Option<&'static SourceFamily> {
        [&APPLICATION, &COMPOSE]
            .into_iter()
            .find(|family| family.name == name)
    }

    /// First label whose field holds a concrete, non-empty value.
    pub fn infer(&self, fields: &SourceFields) -> &'static str {
        self.rules
            .iter()
            .find(|rule| fields.get(rule.field).is_present())
            .map(|rule| rule.label)
            .unwrap_or(self.default_label)
    }

    /// Whether `field` participates in this family's table.
    pub fn uses(&self, field: SourceField) -> bool {
        self.rules.iter().any(|rule| rule.field == field)
    }
}

pub fn infer_application_source_type(fields: &SourceFields) -> &'static str {
    APPLICATION.infer(fields)
}

pub fn infer_compose_source_type(fields: &SourceFields) -> &'static str {
    COMPOSE.infer(fields)
}
