/// Answers whether this process may manage privileged launch daemons.
pub trait Privilege {
    fn is_superuser(&self) -> bool;
}

/// Checks the effective uid of the running process.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveUid;

impl Privilege for EffectiveUid {
    fn is_superuser(&self) -> bool {
        uzers::get_effective_uid() == 0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("must be run as root to manage launch daemons")]
pub struct NotSuperuser;

/// Gate to pass before dispatching any operation with side effects.
pub fn require_superuser(privilege: &dyn Privilege) -> Result<(), NotSuperuser> {
    if privilege.is_superuser() {
        Ok(())
    } else {
        Err(NotSuperuser)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Always(bool);

    impl Privilege for Always {
        fn is_superuser(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn superuser_passes() {
        assert!(require_superuser(&Always(true)).is_ok());
    }

    #[test]
    fn everyone_else_is_rejected() {
        assert!(require_superuser(&Always(false)).is_err());
    }
}
