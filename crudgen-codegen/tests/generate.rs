//! End-to-end generation against temporary project trees.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crudgen_codegen::{
    ErrorKind, Generator, GeneratorConfig, Outcome, TableTarget, TemplateSet,
    naming::NamingConvention,
};
use crudgen_core::{Category, Overwrite, SqlType, TypeMapper};
use tempfile::TempDir;

const MIGRATION: &str = r#"
-- 001_init.up.sql
CREATE TABLE users (
    id bigint NOT NULL,
    name varchar(100) NOT NULL,
    email text,
    created_at timestamp NOT NULL,
    deleted_at timestamp
);

CREATE TABLE posts (
    id bigserial NOT NULL,
    user_id bigint NOT NULL,
    title varchar(200) NOT NULL,
    published boolean NOT NULL
);
"#;

const ENTITY: &str = "package entity\n\nfields:{{#each fields}} {{name}}={{type}}{{/each}}\n";
const REPOSITORY: &str = "#path = internal/repository\n#fileName: /{{lower_entity_name}}/postgres_repo.go\n\npackage {{lower_entity_name}}\n";
const USECASE: &str = "#fileName = {{lower_entity_name}}_service.go\npackage usecase\n";
const HANDLER: &str = "package handler\n";
const PAYLOAD: &str = "#path = api/payload\npackage payload\n";

/// A project root holding a migration and a template directory.
struct Project {
    temp: TempDir,
}

impl Project {
    fn new(templates: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().unwrap();
        let project = Self { temp };

        fs::create_dir_all(project.path("db")).unwrap();
        fs::write(project.migration(), MIGRATION).unwrap();
        fs::create_dir_all(project.templates()).unwrap();
        for (name, source) in templates {
            fs::write(project.templates().join(name), source).unwrap();
        }

        project
    }

    fn standard() -> Self {
        Self::new(&[
            ("entity.tmpl", ENTITY),
            ("repository.tmpl", REPOSITORY),
            ("usecase.tmpl", USECASE),
            ("handler.tmpl", HANDLER),
            ("payload.tmpl", PAYLOAD),
        ])
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    fn migration(&self) -> PathBuf {
        self.path("db/001_init.up.sql")
    }

    fn templates(&self) -> PathBuf {
        self.path("templates")
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.root(), self.migration(), self.templates())
    }

    fn generator(&self) -> Generator {
        Generator::new(self.config()).unwrap()
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }
}

#[test]
fn test_generate_writes_every_template() {
    let project = Project::standard();

    let report = project.generator().generate("users", "User").unwrap();

    let written: Vec<PathBuf> = report.written().map(Path::to_path_buf).collect();
    assert_eq!(
        written,
        vec![
            project.path("core/entity/user.go"),
            project.path("handler/user.go"),
            project.path("api/payload/user.go"),
            project.path("internal/repository/user/postgres_repo.go"),
            project.path("usecase/user_service.go"),
        ]
    );
    assert_eq!(
        project.read("core/entity/user.go"),
        "package entity\n\nfields: ID=int64 Name=string Email=string CreatedAt=time.Time DeletedAt=*time.Time\n"
    );
    assert_eq!(
        project.read("internal/repository/user/postgres_repo.go"),
        "package user\n"
    );
}

#[test]
fn test_generate_overwrites_existing_files() {
    let project = Project::standard();
    fs::create_dir_all(project.path("handler")).unwrap();
    fs::write(project.path("handler/user.go"), "stale content that is longer").unwrap();

    project.generator().generate("users", "User").unwrap();

    assert_eq!(project.read("handler/user.go"), "package handler\n");
}

#[test]
fn test_keep_existing_files() {
    let project = Project::standard();
    fs::create_dir_all(project.path("handler")).unwrap();
    fs::write(project.path("handler/user.go"), "// hand edited").unwrap();

    let generator = Generator::new(project.config().overwrite(Overwrite::IfMissing)).unwrap();
    let report = generator.generate("users", "User").unwrap();

    assert_eq!(project.read("handler/user.go"), "// hand edited");
    assert_eq!(
        report.kept().collect::<Vec<_>>(),
        vec![project.path("handler/user.go").as_path()]
    );
    assert_eq!(report.written().count(), 4);
}

#[test]
fn test_skip_flags() {
    let project = Project::standard();
    let config = project
        .config()
        .skip(Category::Handler)
        .skip(Category::Payload);

    let report = Generator::new(config).unwrap().generate("users", "User").unwrap();

    assert!(!project.path("handler").exists());
    assert!(!project.path("api").exists());
    assert!(project.path("core/entity/user.go").exists());

    let skipped: Vec<&str> = report.skipped().map(|o| o.template.as_str()).collect();
    assert_eq!(skipped, vec!["handler.tmpl", "payload.tmpl"]);
}

#[test]
fn test_fallback_output_dirs() {
    let project = Project::new(&[
        ("entity.tmpl", "package entity\n"),
        ("repository.tmpl", "package repository\n"),
        ("usecase.tmpl", "package usecase\n"),
        ("router.tmpl", "package main\n"),
    ]);
    let config = project
        .config()
        .output_dir(Category::Entity, "domain")
        .output_dir(Category::Repository, "store");

    Generator::new(config).unwrap().generate("posts", "Post").unwrap();

    assert!(project.path("domain/post.go").exists());
    assert!(project.path("store/post/postgres.go").exists());
    assert!(project.path("usecase/post_usecase.go").exists());
    assert!(project.path("router.go").exists());
}

#[test]
fn test_unknown_table_writes_nothing() {
    let project = Project::standard();

    let err = project.generator().generate("comments", "Comment").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaParse);
    assert!(err.to_string().contains("comments"));
    let entries: Vec<_> = fs::read_dir(project.root()).unwrap().collect();
    assert_eq!(entries.len(), 2, "only db/ and templates/ should exist");
}

#[test]
fn test_missing_migration() {
    let project = Project::standard();
    fs::remove_file(project.migration()).unwrap();

    let err = project.generator().generate("users", "User").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MigrationRead);
}

#[test]
fn test_template_dir_errors() {
    let project = Project::new(&[]);

    let empty = Generator::new(project.config()).err().unwrap();
    assert_eq!(empty.kind(), ErrorKind::Configuration);

    let mut config = project.config();
    config.template_dir = project.path("missing");
    let missing = Generator::new(config).err().unwrap();
    assert_eq!(missing.kind(), ErrorKind::Configuration);
}

#[test]
fn test_template_dir_checked_before_migration() {
    let project = Project::new(&[]);
    fs::remove_file(project.migration()).unwrap();

    let err = Generator::new(project.config()).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_malformed_template_fails_at_load() {
    let project = Project::new(&[("entity.tmpl", "{{#if nullable}}never closed\n")]);

    let err = Generator::new(project.config()).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::TemplateParse);
    assert!(err.to_string().contains("entity.tmpl"));
}

#[test]
fn test_strict_mode_rejects_unknown_fields() {
    let project = Project::new(&[("entity.tmpl", "type {{entity}}\n")]);

    let lenient = project.generator();
    lenient.generate("users", "User").unwrap();
    assert_eq!(project.read("core/entity/user.go"), "type \n");

    let strict = Generator::new(project.config().strict(true)).unwrap();
    let err = strict.generate("users", "User").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TemplateParse);
}

#[test]
fn test_failure_keeps_earlier_files() {
    let project = Project::new(&[
        ("entity.tmpl", "package entity\n"),
        ("handler.tmpl", "#fileName: /handlers/\npackage handler\n"),
        ("usecase.tmpl", "package usecase\n"),
    ]);

    let err = project.generator().generate("users", "User").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PathResolution);
    assert!(project.path("core/entity/user.go").exists());
    assert!(!project.path("usecase").exists());
}

#[test]
fn test_write_failure_is_io_error() {
    let project = Project::new(&[("entity.tmpl", "package entity\n")]);
    fs::create_dir_all(project.path("core")).unwrap();
    fs::write(project.path("core/entity"), "a file where a directory is expected").unwrap();

    let err = project.generator().generate("users", "User").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_preview_does_not_write() {
    let project = Project::standard();

    let files = project.generator().preview("users", "User").unwrap();

    assert_eq!(files.len(), 5);
    assert_eq!(files[0].template, "entity.tmpl");
    assert_eq!(files[0].category, Category::Entity);
    assert_eq!(files[0].path, project.path("core/entity/user.go"));
    assert!(!project.path("core").exists());
}

#[test]
fn test_generate_all() {
    let project = Project::new(&[("entity.tmpl", "type {{entity_name}} // {{table_name}}\n")]);
    let targets = [
        TableTarget::from_table("users"),
        TableTarget::new("posts", "Article"),
    ];

    let reports = project.generator().generate_all(&targets).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(project.read("core/entity/users.go"), "type Users // users\n");
    assert_eq!(project.read("core/entity/article.go"), "type Article // posts\n");
}

#[test]
fn test_generate_all_stops_at_first_failure() {
    let project = Project::new(&[("entity.tmpl", "package entity\n")]);
    let targets = [
        TableTarget::new("users", "User"),
        TableTarget::new("comments", "Comment"),
        TableTarget::new("posts", "Post"),
    ];

    let err = project.generator().generate_all(&targets).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaParse);
    assert!(project.path("core/entity/user.go").exists());
    assert!(!project.path("core/entity/post.go").exists());
}

#[test]
fn test_with_templates_from_sources() {
    let project = Project::new(&[("unused.tmpl", "x\n")]);
    let templates = TemplateSet::from_sources(
        [("payload_request.hbs", "#fileName: {{lower_entity_name}}_request.go\npayload\n")],
        false,
    )
    .unwrap();

    let report = Generator::with_templates(project.config(), templates)
        .generate("posts", "Post")
        .unwrap();

    assert_eq!(
        report.outcomes[0].outcome,
        Outcome::Written(project.path("payload/post_request.go"))
    );
}

#[test]
fn test_context_json() {
    let project = Project::standard();

    let ctx = project.generator().context("posts", "Post").unwrap();
    let json: serde_json::Value = serde_json::from_str(&ctx.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["table_name"], "posts");
    assert_eq!(json["fields"][1]["name"], "UserID");
    assert_eq!(json["fields"][3]["type"], "bool");
    assert_eq!(json["last_param_index"], 4);
}

/// Maps columns to TypeScript types.
struct TsTypeMapper;

impl TypeMapper for TsTypeMapper {
    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn map_sql_type(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Int | SqlType::BigInt | SqlType::Float => "number",
            SqlType::Text => "string",
            SqlType::Bool => "boolean",
            SqlType::DateTime => "Date",
        }
    }

    fn wrap_nullable(&self, ty: &str) -> String {
        format!("{} | null", ty)
    }
}

fn snake_to_kebab(s: &str) -> String {
    s.to_lowercase().replace('_', "-")
}

fn column_as_is(column: &str) -> String {
    column.to_string()
}

#[test]
fn test_custom_type_mapper_and_naming() {
    let project = Project::new(&[
        ("entity.tmpl", "fields:{{#each fields}} {{name}}={{type}}{{/each}}\n"),
        ("repository.tmpl", "export {}\n"),
    ]);
    let naming = NamingConvention {
        column_to_field: column_as_is,
        entity_to_file: snake_to_kebab,
        repository_file: "repo",
        usecase_suffix: ".service",
    };

    let generator = project
        .generator()
        .with_type_mapper(TsTypeMapper)
        .with_naming(naming);
    generator.generate("users", "Admin_User").unwrap();

    assert_eq!(
        project.read("core/entity/admin-user.ts"),
        "fields: id=number name=string email=string created_at=Date deleted_at=Date | null\n"
    );
    assert!(project.path("repository/admin-user/repo.ts").exists());
    assert!(!project.path("core/entity/admin-user.go").exists());
}
