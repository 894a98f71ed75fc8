//! Resolved working directory, config and board location for one CLI run

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::errors::Result;
use crate::fs;
use crate::repository::LeadRepository;
use crate::schemas::Config;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub board_path: PathBuf,
}

impl Workspace {
    /// Resolve the working directory, load config and locate the board.
    pub fn open(cwd: Option<&Path>, board: Option<&Path>) -> Result<Self> {
        let root = fs::resolve_cwd(cwd);
        let config = load_config(&root)?;
        let board_path = fs::get_board_path(&root, &config, board);
        Ok(Workspace {
            root,
            config,
            board_path,
        })
    }

    pub fn load_repository(&self) -> Result<LeadRepository> {
        let board = fs::read_board(&self.board_path, &self.config.tenant_id)?;
        LeadRepository::from_board(board)
    }

    pub fn save_repository(&self, repo: &LeadRepository) -> Result<()> {
        fs::write_board(&self.board_path, &repo.to_board())?;
        tracing::debug!(path = %self.board_path.display(), "saved board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{CustomerForm, Gender, LeadForm, Stage};
    use tempfile::TempDir;

    #[test]
    fn test_open_uses_configured_board() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("leadflow.json"),
            r#"{"tenant_id": "store-9", "board_path": "pipeline.json"}"#,
        )
        .unwrap();

        let ws = Workspace::open(Some(temp.path()), None).unwrap();
        assert_eq!(ws.config.tenant_id, "store-9");
        assert_eq!(ws.board_path, temp.path().join("pipeline.json"));
    }

    #[test]
    fn test_save_and_reload_repository() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::open(Some(temp.path()), None).unwrap();

        let mut repo = ws.load_repository().unwrap();
        assert_eq!(repo.tenant_id(), "default");
        let lead = repo
            .create_lead(
                Stage::StoreInterest,
                LeadForm::new(CustomerForm::new("Maria", "555", Gender::Female), 900.0),
            )
            .unwrap();
        ws.save_repository(&repo).unwrap();

        let reloaded = ws.load_repository().unwrap();
        assert_eq!(reloaded.get(&lead.id).unwrap(), &lead);
    }
}
