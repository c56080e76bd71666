mod device;

pub use device::{
    Permission, PermissionProvider, PositionEvent, PositionProvider, StaticPermission,
    Subscription,
};
