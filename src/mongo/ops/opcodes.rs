use std::fmt;

/// @see https://docs.mongodb.com/manual/legacy-opcodes/
pub const MONGO_OP_REPLY_CODE: i32 = 1;
pub const MONGO_OP_MSG_CODE: i32 = 1000;
pub const MONGO_OP_UPDATE_CODE: i32 = 2001;
pub const MONGO_OP_INSERT_CODE: i32 = 2002;
pub const MONGO_OP_QUERY_CODE: i32 = 2004;
pub const MONGO_OP_GET_MORE_CODE: i32 = 2005;
pub const MONGO_OP_DELETE_CODE: i32 = 2006;
pub const MONGO_OP_KILL_CURSORS_CODE: i32 = 2007;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MongoOpCode {
    OpReply = MONGO_OP_REPLY_CODE,
    // the informational message of pre-3.6 servers, not the OP_MSG of 2013
    OpMsg = MONGO_OP_MSG_CODE,
    OpUpdate = MONGO_OP_UPDATE_CODE,
    OpInsert = MONGO_OP_INSERT_CODE,
    //    RESERVED = 2003
    OpQuery = MONGO_OP_QUERY_CODE,
    OpGetMore = MONGO_OP_GET_MORE_CODE,
    OpDelete = MONGO_OP_DELETE_CODE,
    OpKillCursors = MONGO_OP_KILL_CURSORS_CODE,
}

impl MongoOpCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            MongoOpCode::OpReply => "OP_REPLY",
            MongoOpCode::OpMsg => "OP_MSG",
            MongoOpCode::OpUpdate => "OP_UPDATE",
            MongoOpCode::OpInsert => "OP_INSERT",
            MongoOpCode::OpQuery => "OP_QUERY",
            MongoOpCode::OpGetMore => "OP_GET_MORE",
            MongoOpCode::OpDelete => "OP_DELETE",
            MongoOpCode::OpKillCursors => "OP_KILL_CURSORS",
        }
    }

    pub fn is_response(self) -> bool {
        self == MongoOpCode::OpReply
    }

    pub fn expects_response(self) -> bool {
        match self {
            MongoOpCode::OpQuery | MongoOpCode::OpGetMore => true,
            _ => false,
        }
    }
}

impl TryFrom<i32> for MongoOpCode {
    type Error = i32;

    fn try_from(op: i32) -> Result<Self, Self::Error> {
        match op {
            MONGO_OP_REPLY_CODE => Ok(MongoOpCode::OpReply),
            MONGO_OP_MSG_CODE => Ok(MongoOpCode::OpMsg),
            MONGO_OP_UPDATE_CODE => Ok(MongoOpCode::OpUpdate),
            MONGO_OP_INSERT_CODE => Ok(MongoOpCode::OpInsert),
            MONGO_OP_QUERY_CODE => Ok(MongoOpCode::OpQuery),
            MONGO_OP_GET_MORE_CODE => Ok(MongoOpCode::OpGetMore),
            MONGO_OP_DELETE_CODE => Ok(MongoOpCode::OpDelete),
            MONGO_OP_KILL_CURSORS_CODE => Ok(MongoOpCode::OpKillCursors),
            unknown => Err(unknown),
        }
    }
}

impl fmt::Display for MongoOpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
