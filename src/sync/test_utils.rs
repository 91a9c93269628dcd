// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory git model for synchronizer tests.
//!
//! A branch is its list of commit ids, oldest first; the tip is the last id.
//! Servers are keyed by URL, so rebinding a remote really changes what a
//! fetch or push talks to.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{GitError, VendorResult};
use crate::git::backend::{GitMutation, GitQuery};
use crate::git::refs::{LocalBranch, RemoteBranch};
use crate::registry::VendorEntry;

use super::batch::Workspace;

pub const UPSTREAM_URL: &str = "https://example.com/upstream/lib.git";
pub const ORIGIN_URL: &str = "https://example.com/acme/lib.git";

type History = Vec<String>;

#[derive(Debug, Default, Clone)]
pub struct Server {
    pub branches: BTreeMap<String, History>,
    pub head: Option<String>,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub servers: BTreeMap<String, Server>,
    pub remotes: BTreeMap<String, String>,
    pub fetched: BTreeMap<String, Server>,
    pub local: BTreeMap<String, History>,
    pub current: Option<String>,
    pub dirty: bool,
    pub fail_fetch: bool,
    pub reject_push: BTreeSet<String>,
    pub conflicts: BTreeSet<String>,
    pub calls: Vec<String>,
}

fn tip(history: &History) -> String {
    history.last().cloned().unwrap_or_default()
}

fn failed(command: &str, message: &str) -> crate::error::VendorError {
    GitError::CommandFailed {
        command: command.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Shared handle to one fake working copy.
#[derive(Debug, Clone)]
pub struct FakeRepo {
    workdir: PathBuf,
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeRepo {
    /// Working copy with an upstream server holding `main` and `dev`, an
    /// empty origin server, and no remotes configured.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.upstream_commit("main", "u1");
        repo.upstream_commit("dev", "d1");
        repo.state.borrow_mut().servers.get_mut(UPSTREAM_URL).unwrap().head = Some("main".into());
        repo
    }

    /// Working copy whose upstream server has no branches.
    pub fn empty() -> Self {
        let mut state = FakeState::default();
        state.servers.insert(UPSTREAM_URL.to_string(), Server::default());
        state.servers.insert(ORIGIN_URL.to_string(), Server::default());
        Self {
            workdir: PathBuf::from("/fake/lib"),
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Append a commit to a branch on the upstream server.
    pub fn upstream_commit(&self, branch: &str, id: &str) {
        let mut state = self.state.borrow_mut();
        let server = state.servers.get_mut(UPSTREAM_URL).unwrap();
        server
            .branches
            .entry(branch.to_string())
            .or_default()
            .push(id.to_string());
    }

    pub fn upstream_branch(&self, branch: &str) -> History {
        self.state.borrow().servers[UPSTREAM_URL].branches[branch].clone()
    }

    pub fn set_origin_branch(&self, branch: &str, history: &[&str]) {
        let mut state = self.state.borrow_mut();
        let server = state.servers.get_mut(ORIGIN_URL).unwrap();
        server.branches.insert(
            branch.to_string(),
            history.iter().map(ToString::to_string).collect(),
        );
    }

    pub fn origin_branch(&self, branch: &str) -> Option<History> {
        self.state.borrow().servers[ORIGIN_URL]
            .branches
            .get(branch)
            .cloned()
    }

    pub fn origin_branch_names(&self) -> Vec<String> {
        self.state.borrow().servers[ORIGIN_URL]
            .branches
            .keys()
            .cloned()
            .collect()
    }

    pub fn local_branch(&self, branch: &str) -> Option<History> {
        self.state.borrow().local.get(branch).cloned()
    }

    pub fn set_remote(&self, name: &str, url: &str) {
        self.state
            .borrow_mut()
            .remotes
            .insert(name.to_string(), url.to_string());
    }

    pub fn bind_remotes(&self) {
        self.set_remote("origin", ORIGIN_URL);
        self.set_remote("upstream", UPSTREAM_URL);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }

    /// Resolve `remote/branch` against the fetched refs.
    fn resolve(&self, target: &str) -> VendorResult<History> {
        let state = self.state.borrow();
        let (remote, branch) = target
            .split_once('/')
            .ok_or_else(|| failed("rev-parse", &format!("bad revision '{target}'")))?;
        state
            .fetched
            .get(remote)
            .and_then(|s| s.branches.get(branch))
            .cloned()
            .ok_or_else(|| failed("rev-parse", &format!("unknown revision '{target}'")))
    }
}

pub fn entry(name: &str) -> VendorEntry {
    VendorEntry {
        name: name.to_string(),
        path: format!("vendor/{name}"),
        origin_url: ORIGIN_URL.to_string(),
        upstream_url: Some(UPSTREAM_URL.to_string()),
    }
}

impl GitQuery for FakeRepo {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn remote_url(&self, remote: &str) -> VendorResult<Option<String>> {
        Ok(self.state.borrow().remotes.get(remote).cloned())
    }

    fn remote_branches(&self, remote: &str) -> VendorResult<Vec<RemoteBranch>> {
        let state = self.state.borrow();
        let Some(server) = state.fetched.get(remote) else {
            return Ok(Vec::new());
        };
        let mut branches: Vec<RemoteBranch> = server
            .branches
            .iter()
            .map(|(name, history)| RemoteBranch::new(name.as_str(), tip(history)))
            .collect();
        if let Some(head) = &server.head {
            branches.push(RemoteBranch {
                name: "HEAD".to_string(),
                tip: tip(&server.branches[head]),
                symbolic: true,
            });
        }
        Ok(branches)
    }

    fn local_branches(&self) -> VendorResult<Vec<LocalBranch>> {
        Ok(self
            .state
            .borrow()
            .local
            .iter()
            .map(|(name, history)| LocalBranch {
                name: name.clone(),
                tip: tip(history),
            })
            .collect())
    }

    fn has_uncommitted_changes(&self) -> VendorResult<bool> {
        Ok(self.state.borrow().dirty)
    }
}

impl GitMutation for FakeRepo {
    fn add_remote(&self, name: &str, url: &str) -> VendorResult<()> {
        self.record(format!("remote add {name} {url}"));
        let mut state = self.state.borrow_mut();
        if state.remotes.contains_key(name) {
            return Err(failed("remote add", "remote already exists"));
        }
        state.remotes.insert(name.to_string(), url.to_string());
        Ok(())
    }

    fn set_remote_url(&self, name: &str, url: &str) -> VendorResult<()> {
        self.record(format!("remote set-url {name} {url}"));
        let mut state = self.state.borrow_mut();
        match state.remotes.get_mut(name) {
            Some(current) => {
                *current = url.to_string();
                Ok(())
            }
            None => Err(failed("remote set-url", "no such remote")),
        }
    }

    fn fetch_all(&self) -> VendorResult<()> {
        self.record("fetch".to_string());
        let mut state = self.state.borrow_mut();
        if state.fail_fetch {
            return Err(failed("fetch --all", "could not read from remote repository"));
        }
        let fetched: BTreeMap<String, Server> = state
            .remotes
            .iter()
            .filter_map(|(name, url)| state.servers.get(url).map(|s| (name.clone(), s.clone())))
            .collect();
        state.fetched = fetched;
        Ok(())
    }

    fn checkout(&self, branch: &str) -> VendorResult<()> {
        self.record(format!("checkout {branch}"));
        let mut state = self.state.borrow_mut();
        if !state.local.contains_key(branch) {
            return Err(failed("checkout", "pathspec did not match"));
        }
        state.current = Some(branch.to_string());
        Ok(())
    }

    fn reset_hard(&self, target: &str) -> VendorResult<()> {
        self.record(format!("reset {target}"));
        let history = self.resolve(target)?;
        let mut state = self.state.borrow_mut();
        let current = state
            .current
            .clone()
            .ok_or_else(|| failed("reset", "no branch checked out"))?;
        state.local.insert(current, history);
        state.dirty = false;
        Ok(())
    }

    fn create_tracking_branch(&self, branch: &str, start_point: &str) -> VendorResult<()> {
        self.record(format!("branch {branch} {start_point}"));
        let history = self.resolve(start_point)?;
        let mut state = self.state.borrow_mut();
        if state.local.contains_key(branch) {
            return Err(failed("checkout -b", "branch already exists"));
        }
        state.local.insert(branch.to_string(), history);
        state.current = Some(branch.to_string());
        Ok(())
    }

    fn push(&self, remote: &str, branches: &[String], force: bool) -> VendorResult<()> {
        self.record(format!(
            "push{} {remote} {}",
            if force { " --force" } else { "" },
            branches.join(",")
        ));
        let mut state = self.state.borrow_mut();
        let url = state
            .remotes
            .get(remote)
            .cloned()
            .ok_or_else(|| failed("push", "no such remote"))?;
        for branch in branches {
            if state.reject_push.contains(branch) {
                return Err(failed("push", "remote rejected"));
            }
            let local = state.local.get(branch).cloned().unwrap_or_default();
            let server = state
                .servers
                .get_mut(&url)
                .ok_or_else(|| failed("push", "repository not found"))?;
            if let Some(existing) = server.branches.get(branch)
                && !force
                && !local.starts_with(existing)
            {
                return Err(failed("push", "non-fast-forward"));
            }
            server.branches.insert(branch.clone(), local);
        }
        Ok(())
    }

    fn rebase(&self, branch: &str, onto: &str) -> VendorResult<()> {
        self.record(format!("rebase {branch} {onto}"));
        let base = self.resolve(onto)?;
        let mut state = self.state.borrow_mut();
        if state.conflicts.contains(branch) {
            return Err(GitError::RebaseConflict {
                branch: branch.to_string(),
                onto: onto.to_string(),
            }
            .into());
        }
        let history = state
            .local
            .get(branch)
            .cloned()
            .ok_or_else(|| failed("rebase", "no such branch"))?;
        let mut rebased = base.clone();
        rebased.extend(history.into_iter().filter(|c| !base.contains(c)));
        state.local.insert(branch.to_string(), rebased);
        state.current = Some(branch.to_string());
        Ok(())
    }
}

/// Workspace of fake working copies, keyed by entry name.
#[derive(Debug, Default)]
pub struct FakeWorkspace {
    pub repos: BTreeMap<String, FakeRepo>,
    pub initialized: RefCell<BTreeSet<String>>,
    pub fail_initialize: bool,
    pub initialize_calls: RefCell<Vec<Vec<String>>>,
}

impl FakeWorkspace {
    /// One initialized, remote-less repo per name.
    pub fn with(names: &[&str]) -> Self {
        let mut workspace = Self::default();
        for name in names {
            workspace.repos.insert((*name).to_string(), FakeRepo::new());
            workspace.initialized.borrow_mut().insert((*name).to_string());
        }
        workspace
    }

    pub fn repo(&self, name: &str) -> &FakeRepo {
        &self.repos[name]
    }
}

impl Workspace for FakeWorkspace {
    type Repo = FakeRepo;

    fn is_initialized(&self, entry: &VendorEntry) -> bool {
        self.initialized.borrow().contains(&entry.name)
    }

    fn initialize(&self, entries: &[&VendorEntry]) -> VendorResult<()> {
        self.initialize_calls
            .borrow_mut()
            .push(entries.iter().map(|e| e.name.clone()).collect());
        if self.fail_initialize {
            return Err(failed("submodule update --init", "clone failed"));
        }
        let mut initialized = self.initialized.borrow_mut();
        for entry in entries {
            initialized.insert(entry.name.clone());
        }
        Ok(())
    }

    fn open(&self, entry: &VendorEntry) -> VendorResult<FakeRepo> {
        if !self.is_initialized(entry) {
            return Err(GitError::RepoNotFound {
                path: entry.path.clone(),
            }
            .into());
        }
        self.repos
            .get(&entry.name)
            .cloned()
            .ok_or_else(|| failed("open", "no such working copy"))
    }
}
