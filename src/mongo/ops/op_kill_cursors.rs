/// @see https://docs.mongodb.com/manual/reference/mongodb-wire-protocol/#op-kill-cursors
///
/// The cursor ids are of no interest to a traffic observer and are not read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpKillCursors;
