//! Selects the concrete profile a new session is built from.

use crate::config::{AppSettings, NewTerminalArgs, Profile, ProfileId};
use crate::error::SettingsError;

/// Maps a profile request (GUID, name, or nothing) to a registered profile.
pub struct ProfileResolver;

impl ProfileResolver {
    /// Resolve the profile requested by `args`.
    ///
    /// A GUID (braced or not) is looked up directly, anything else by name.
    /// Without a request the default profile is used. Fails with
    /// [`SettingsError::ProfileNotFound`] when nothing matches.
    pub fn resolve<'a>(
        app: &'a AppSettings,
        args: Option<&NewTerminalArgs>,
    ) -> Result<(ProfileId, &'a Profile), SettingsError> {
        let requested = args.and_then(NewTerminalArgs::requested_profile);

        let profile = app
            .profile_for_args(args)
            .and_then(|id| app.find_profile(&id));

        match profile {
            Some(profile) => {
                log::debug!("Resolved profile '{}' ({})", profile.name, profile.guid);
                Ok((profile.guid, profile))
            }
            None => {
                let requested = match requested {
                    Some(requested) => requested.to_string(),
                    None => app
                        .globals
                        .default_profile
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "<default>".to_string()),
                };
                log::warn!("No profile matches '{}'", requested);
                Err(SettingsError::ProfileNotFound { requested })
            }
        }
    }

    /// Look up a profile by GUID
    pub fn resolve_id<'a>(
        app: &'a AppSettings,
        id: &ProfileId,
    ) -> Result<&'a Profile, SettingsError> {
        app.find_profile(id)
            .ok_or_else(|| SettingsError::ProfileNotFound {
                requested: id.to_string(),
            })
    }
}
