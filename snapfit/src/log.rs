#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use std::{println as debug, println as trace};

#[cfg(not(test))]
#[allow(unused_imports)]
pub(crate) use log::{debug, trace};
