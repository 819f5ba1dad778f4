#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use omega_cli::{
        cli::Cli,
        commands::{self, open_newsroom, Outcome},
    };
    use omega_news_shared::models::CommentStatus;
    use tempfile::tempdir;

    fn run(data_dir: &Path, args: &[&str]) -> anyhow::Result<(Outcome, String)> {
        let data_dir = data_dir.to_str().expect("utf-8 temp path");
        let argv = ["omega-cli", "--data-dir", data_dir]
            .into_iter()
            .chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        let outcome = commands::run(cli, &mut out)?;
        Ok((outcome, String::from_utf8(out).expect("utf-8 output")))
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempdir().expect("create temp dir");
        let (_, output) = run(dir.path(), &["init"]).expect("first init");
        assert!(output.starts_with("Seeded 7 collections"));
        assert!(dir.path().join("omega_articles.json").is_file());
        assert!(dir.path().join("omega_settings.json").is_file());

        let err = run(dir.path(), &["init"]).expect_err("second init must fail");
        assert!(err.to_string().contains("--force"));

        run(dir.path(), &["delete", "articles", "1"]).expect("delete");
        run(dir.path(), &["init", "--force"]).expect("forced init");
        let room = open_newsroom(dir.path()).expect("open");
        assert_eq!(room.store().articles().len(), 12);
    }

    #[test]
    fn add_category_appends_with_derived_slug() {
        let dir = tempdir().expect("create temp dir");
        let (_, output) =
            run(dir.path(), &["add-category", "--name", "Science & Tech"]).expect("add");
        assert!(output.starts_with("Category added!"));

        let room = open_newsroom(dir.path()).expect("open");
        let last = room.store().categories().last().cloned().expect("category");
        assert_eq!(last.name, "Science & Tech");
        assert_eq!(last.slug, "science--tech");
        assert_eq!(room.store().categories().len(), 9);
    }

    #[test]
    fn forced_init_repairs_a_corrupt_collection() {
        let dir = tempdir().expect("create temp dir");
        run(dir.path(), &["init"]).expect("init");
        std::fs::write(dir.path().join("omega_categories.json"), "[{").expect("corrupt file");
        assert!(open_newsroom(dir.path()).is_err());

        let (_, output) = run(dir.path(), &["init", "--force"]).expect("forced init");
        assert!(output.starts_with("Seeded 7 collections"));
        let room = open_newsroom(dir.path()).expect("open repaired store");
        assert_eq!(room.store().categories().len(), 8);
    }

    #[test]
    fn delete_unknown_id_is_absorbed_and_keeps_data() {
        let dir = tempdir().expect("create temp dir");
        run(dir.path(), &["init"]).expect("init");
        let (outcome, output) = run(dir.path(), &["delete", "media", "nope"]).expect("unknown id");
        assert_eq!(outcome, Outcome::Done);
        assert!(output.contains("nothing removed"));
        let room = open_newsroom(dir.path()).expect("open");
        assert_eq!(room.store().media().len(), 4);

        let (_, output) = run(dir.path(), &["delete", "media", "2"]).expect("delete");
        assert_eq!(output.trim(), "Media deleted.");
        let room = open_newsroom(dir.path()).expect("open");
        assert_eq!(room.store().media().len(), 3);
    }

    #[test]
    fn moderating_unknown_comment_changes_nothing() {
        let dir = tempdir().expect("create temp dir");
        run(dir.path(), &["init"]).expect("init");
        let before = open_newsroom(dir.path()).expect("open").store().comments().to_vec();

        let (outcome, output) = run(dir.path(), &["moderate", "ghost", "reject"]).expect("moderate");
        assert_eq!(outcome, Outcome::Done);
        assert!(output.contains("nothing changed"));
        let after = open_newsroom(dir.path()).expect("open").store().comments().to_vec();
        assert_eq!(after, before);
    }

    #[test]
    fn moderate_sets_comment_status() {
        let dir = tempdir().expect("create temp dir");
        let (_, output) = run(dir.path(), &["moderate", "3", "reject"]).expect("moderate");
        assert_eq!(output.trim(), "Comment rejected.");

        let room = open_newsroom(dir.path()).expect("open");
        let status = room
            .store()
            .comments()
            .iter()
            .find(|comment| comment.id == "3")
            .and_then(|comment| comment.status);
        assert_eq!(status, Some(CommentStatus::Rejected));

        let (_, stats) = run(dir.path(), &["stats"]).expect("stats");
        assert!(stats.contains("comments:   3 (0 pending, 2 approved, 1 rejected)"));
    }

    #[test]
    fn login_reports_through_outcome() {
        let dir = tempdir().expect("create temp dir");
        let (outcome, output) = run(
            dir.path(),
            &["login", "--email", "admin@omeganews.com", "--password", "admin123"],
        )
        .expect("login");
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(output.trim(), "Welcome back, Admin!");

        let (outcome, output) = run(
            dir.path(),
            &["login", "--email", "admin@omeganews.com", "--password", "guess"],
        )
        .expect("login");
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(output.trim(), "Invalid email or password");
    }

    #[test]
    fn trending_lists_most_viewed_first() {
        let dir = tempdir().expect("create temp dir");
        let (_, output) = run(dir.path(), &["trending", "--limit", "2"]).expect("trending");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Election Updates"));
        assert!(lines[1].contains("Space Tourism"));
    }

    #[test]
    fn list_rejects_unknown_collection() {
        let dir = tempdir().expect("create temp dir");
        assert!(run(dir.path(), &["list", "videos"]).is_err());

        let (_, output) = run(dir.path(), &["list", "categories"]).expect("list");
        assert!(output.lines().any(|line| line == "4\tTech (tech)"));
    }
}
