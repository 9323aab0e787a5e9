//! User and group name resolution.
//!
//! The long listing resolves numeric ids through [OwnerLookup] so that the
//! collector and renderer can be driven by a fixed table in tests.
//! [SystemOwners] is the real implementation backed by the `uzers` cache.

/// Resolves numeric user and group ids to names.
pub trait OwnerLookup {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    /// Name of the user, or the number itself if it has no passwd entry.
    fn user_label(&self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| uid.to_string())
    }

    /// Name of the group, or the number itself if it has no group entry.
    fn group_label(&self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| gid.to_string())
    }
}

/// Looks ids up in the system user database, caching each answer.
pub struct SystemOwners {
    #[cfg(unix)]
    cache: uzers::UsersCache,
}

impl SystemOwners {
    pub fn new() -> Self {
        SystemOwners {
            #[cfg(unix)]
            cache: uzers::UsersCache::new(),
        }
    }
}

impl Default for SystemOwners {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl OwnerLookup for SystemOwners {
    fn user_name(&self, uid: u32) -> Option<String> {
        use uzers::Users;
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        use uzers::Groups;
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
impl OwnerLookup for SystemOwners {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

/// Ids only, never names. Handy when the user database should not be consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericOwners;

impl OwnerLookup for NumericOwners {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}
