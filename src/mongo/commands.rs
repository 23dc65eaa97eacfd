use bson::Document;

/// Commands a client can issue by querying the `<db>.$cmd` collection.
/// Matched against the top-level keys of the query document, case-sensitive.
pub const KNOWN_COMMANDS: &[&str] = &[
    // query and write
    "aggregate",
    "count",
    "delete",
    "distinct",
    "eval",
    "find",
    "findAndModify",
    "findandmodify",
    "geoNear",
    "geoSearch",
    "getLastError",
    "getMore",
    "getPrevError",
    "group",
    "insert",
    "mapReduce",
    "mapreduce",
    "parallelCollectionScan",
    "resetError",
    "text",
    "update",
    // authentication
    "authenticate",
    "copydbgetnonce",
    "getnonce",
    "logout",
    "saslContinue",
    "saslStart",
    // user and role management
    "createRole",
    "createUser",
    "dropAllUsersFromDatabase",
    "dropRole",
    "dropUser",
    "grantRolesToUser",
    "revokeRolesFromUser",
    "rolesInfo",
    "updateUser",
    "usersInfo",
    // replication and sharding
    "isMaster",
    "ismaster",
    "replSetGetStatus",
    "replSetGetConfig",
    "replSetInitiate",
    "replSetReconfig",
    "replSetStepDown",
    "enableSharding",
    "shardCollection",
    "listShards",
    // administration
    "cloneCollection",
    "collMod",
    "compact",
    "convertToCapped",
    "copydb",
    "create",
    "createIndexes",
    "currentOp",
    "drop",
    "dropDatabase",
    "dropIndexes",
    "fsync",
    "killCursors",
    "killOp",
    "listCollections",
    "listDatabases",
    "listIndexes",
    "reIndex",
    "renameCollection",
    "repairDatabase",
    "shutdown",
    // diagnostics
    "buildInfo",
    "buildinfo",
    "collStats",
    "connectionStatus",
    "dbStats",
    "explain",
    "getCmdLineOpts",
    "getLog",
    "getParameter",
    "hostInfo",
    "listCommands",
    "ping",
    "profile",
    "serverStatus",
    "setParameter",
    "top",
    "validate",
    "whatsmyuri",
];

/// The interned name of `name` when it is a command. Case-sensitive.
pub fn known_command(name: &str) -> Option<&'static str> {
    KNOWN_COMMANDS.iter().copied().find(|command| *command == name)
}

/// First top-level key of `query`, in document order, that names a command.
pub fn pick_command(query: &Document) -> Option<&'static str> {
    query.keys().find_map(|key| known_command(key))
}
