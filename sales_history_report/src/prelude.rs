pub use std::{
    collections::HashSet,
    env,
    io::{Cursor, Write},
    sync::Arc,
};

pub use tokio::time::Duration;

pub use anyhow::{anyhow, Context};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
