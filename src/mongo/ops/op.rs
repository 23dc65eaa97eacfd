use serde_json::{Map, Value};

use crate::mongo::ops::op_delete::OpDelete;
use crate::mongo::ops::op_get_more::OpGetMore;
use crate::mongo::ops::op_insert::OpInsert;
use crate::mongo::ops::op_kill_cursors::OpKillCursors;
use crate::mongo::ops::op_msg::OpMsg;
use crate::mongo::ops::op_query::OpQuery;
use crate::mongo::ops::op_reply::OpReply;
use crate::mongo::ops::op_update::OpUpdate;
use crate::mongo::ops::opcodes::MongoOpCode;

#[derive(Debug, Clone, PartialEq)]
pub enum MongoOp {
    Reply(OpReply),
    Msg(OpMsg),
    Update(OpUpdate),
    Insert(OpInsert),
    Query(OpQuery),
    GetMore(OpGetMore),
    Delete(OpDelete),
    KillCursors(OpKillCursors),
}

impl MongoOp {
    /// Payload with no field read yet.
    pub fn empty(op_code: MongoOpCode) -> Self {
        match op_code {
            MongoOpCode::OpReply => MongoOp::Reply(OpReply::default()),
            MongoOpCode::OpMsg => MongoOp::Msg(OpMsg::default()),
            MongoOpCode::OpUpdate => MongoOp::Update(OpUpdate::default()),
            MongoOpCode::OpInsert => MongoOp::Insert(OpInsert::default()),
            MongoOpCode::OpQuery => MongoOp::Query(OpQuery::default()),
            MongoOpCode::OpGetMore => MongoOp::GetMore(OpGetMore::default()),
            MongoOpCode::OpDelete => MongoOp::Delete(OpDelete::default()),
            MongoOpCode::OpKillCursors => MongoOp::KillCursors(OpKillCursors),
        }
    }

    /// Semantic operation name. Replies take theirs from the request they
    /// answer, so they have none.
    pub fn method(&self) -> Option<&'static str> {
        match self {
            MongoOp::Reply(_) => None,
            MongoOp::Msg(_) => Some("msg"),
            MongoOp::Update(_) => Some("update"),
            MongoOp::Insert(_) => Some("insert"),
            MongoOp::Query(op_query) => op_query.method,
            MongoOp::GetMore(_) => Some("getMore"),
            MongoOp::Delete(_) => Some("delete"),
            MongoOp::KillCursors(_) => Some("killCursors"),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MongoOp::Reply(op_reply) => op_reply.error.as_deref(),
            _ => None,
        }
    }

    /// String-keyed view of the fields read so far.
    pub fn to_event(&self) -> Map<String, Value> {
        let mut event = Map::new();
        match self {
            MongoOp::Reply(op_reply) => op_reply.write_event(&mut event),
            MongoOp::Msg(op_msg) => op_msg.write_event(&mut event),
            MongoOp::Update(op_update) => op_update.write_event(&mut event),
            MongoOp::Insert(op_insert) => op_insert.write_event(&mut event),
            MongoOp::Query(op_query) => op_query.write_event(&mut event),
            MongoOp::GetMore(op_get_more) => op_get_more.write_event(&mut event),
            MongoOp::Delete(op_delete) => op_delete.write_event(&mut event),
            MongoOp::KillCursors(_) => {}
        }
        event
    }
}
