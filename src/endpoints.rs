//! The operation table.
//!
//! Each entry reads `name(arg: kind) => Category "resource", selections;`
//! where `kind` is `id` (required `u64`), `opt` (`Option<u64>`) or `ids`
//! (`&[u64]`, comma-joined), and the trailing flag is `selections` or `bare`
//! for routes that take no selections parameter. The macro emits both the
//! [`ENDPOINTS`] table and one method per entry on [`Client`].

use crate::client::{Client, Response, Result};
use crate::endpoint::{list_segment, optional_segment, Category, Endpoint, Identifier};

macro_rules! endpoints {
    ($(
        $(#[doc = $doc:literal])*
        $name:ident $(($arg:ident: $kind:ident))? => $category:ident $resource:literal, $sel:ident;
    )*) => {
        /// Every operation of the API, in declaration order.
        pub static ENDPOINTS: &[Endpoint] = &[
            $(endpoints!(@endpoint $name $category $resource [$($kind)?] $sel [$($doc)*]),)*
        ];

        impl Client {
            $(endpoints!(
                @method [$(#[doc = $doc])*] $name [$($arg: $kind)?] $sel
                endpoints!(@endpoint $name $category $resource [$($kind)?] $sel [$($doc)*])
            );)*
        }
    };

    (@endpoint $name:ident $category:ident $resource:literal [$($kind:ident)?] $sel:ident [$($doc:literal)*]) => {
        Endpoint {
            name: stringify!($name),
            category: Category::$category,
            resource: $resource,
            identifier: endpoints!(@identifier $($kind)?),
            selections: endpoints!(@selections $sel),
            summary: concat!($($doc),*),
        }
    };

    (@identifier) => { Identifier::None };
    (@identifier id) => { Identifier::Required };
    (@identifier ids) => { Identifier::Required };
    (@identifier opt) => { Identifier::Optional };

    (@selections selections) => { true };
    (@selections bare) => { false };

    (@type id) => { u64 };
    (@type ids) => { &[u64] };
    (@type opt) => { Option<u64> };

    (@segment id $arg:ident) => { Some($arg.to_string()) };
    (@segment ids $arg:ident) => { Some(list_segment($arg)) };
    (@segment opt $arg:ident) => { optional_segment($arg) };

    (@method [$($doc:tt)*] $name:ident [] selections $endpoint:expr) => {
        $($doc)*
        pub fn $name(&self, selections: Option<&str>) -> Result<Response> {
            self.fetch(&$endpoint, None, selections)
        }
    };
    (@method [$($doc:tt)*] $name:ident [] bare $endpoint:expr) => {
        $($doc)*
        pub fn $name(&self) -> Result<Response> {
            self.fetch(&$endpoint, None, None)
        }
    };
    (@method [$($doc:tt)*] $name:ident [$arg:ident: $kind:ident] selections $endpoint:expr) => {
        $($doc)*
        pub fn $name(
            &self,
            $arg: endpoints!(@type $kind),
            selections: Option<&str>,
        ) -> Result<Response> {
            let id = endpoints!(@segment $kind $arg);
            self.fetch(&$endpoint, id.as_deref(), selections)
        }
    };
}

endpoints! {
    /// Get your detailed attacks.
    user_attacks => User "attacks", selections;
    /// Get your simplified attacks.
    user_attacksfull => User "attacksfull", selections;
    /// Get bounties placed on you.
    user_bounties => User "bounties", selections;
    /// Get bounties placed on a specific user.
    user_bounties_by_id(user_id: id) => User "bounties", selections;
    /// Get your competition's event start time.
    user_calendar => User "calendar", bare;
    /// Get your crime statistics for a given crime.
    user_crimes(crime_id: id) => User "crimes", selections;
    /// Get your enlisted cars.
    user_enlistedcars => User "enlistedcars", selections;
    /// Get your current faction balance.
    user_factionbalance => User "factionbalance", selections;
    /// Get updates on your forum threads and posts.
    user_forumfeed => User "forumfeed", selections;
    /// Get updates on your friends' activity in the forum.
    user_forumfriends => User "forumfriends", selections;
    /// Get your forum posts.
    user_forumposts => User "forumposts", selections;
    /// Get forum posts for a specific player.
    user_forumposts_by_id(user_id: id) => User "forumposts", selections;
    /// Get updates on threads you are subscribed to.
    user_forumsubscribedthreads => User "forumsubscribedthreads", selections;
    /// Get your forum threads.
    user_forumthreads => User "forumthreads", selections;
    /// Get forum threads for a specific player.
    user_forumthreads_by_id(user_id: id) => User "forumthreads", selections;
    /// Get your hall of fame rankings.
    user_hof => User "hof", selections;
    /// Get hall of fame rankings for a specific player.
    user_hof_by_id(user_id: id) => User "hof", selections;
    /// Get your item market listings.
    user_itemmarket => User "itemmarket", selections;
    /// Get your starter job positions.
    user_jobranks => User "jobranks", selections;
    /// Get your current ongoing organized crime.
    user_organizedcrime => User "organizedcrime", selections;
    /// Get your personal stats.
    user_personalstats => User "personalstats", selections;
    /// Get personal stats for a specific player.
    user_personalstats_by_id(user_id: id) => User "personalstats", selections;
    /// Get your races.
    user_races => User "races", selections;
    /// Get your detailed revives.
    user_revives => User "revives", selections;
    /// Get your simplified revives.
    user_revives_full => User "revivesFull", selections;
    /// Get all available user selections.
    user_lookup => User "lookup", selections;
    /// Get the current server time for the user section.
    user_timestamp => User "timestamp", bare;
    /// Get any user selection.
    user => User "", selections;

    /// Get your faction's applications.
    faction_applications => Faction "applications", selections;
    /// Get your faction's detailed attacks.
    faction_attacks => Faction "attacks", selections;
    /// Get your faction's simplified attacks.
    faction_attacksfull => Faction "attacksfull", selections;
    /// Get basic faction details, for your faction or the given one.
    faction_basic(faction_id: opt) => Faction "basic", selections;
    /// Get a faction's current chain.
    faction_chain(faction_id: opt) => Faction "chain", selections;
    /// Get a list of completed chains.
    faction_chains(faction_id: opt) => Faction "chains", selections;
    /// Get the latest chain report, or the report of a specific chain.
    faction_chainreport(chain_id: opt) => Faction "chainreport", selections;
    /// Get your faction's organized crimes.
    faction_crimes => Faction "crimes", selections;
    /// Get a faction's hall of fame rankings.
    faction_hof(faction_id: opt) => Faction "hof", selections;
    /// Get a list of faction members.
    faction_members(faction_id: opt) => Faction "members", selections;
    /// Get your faction's news details.
    faction_news => Faction "news", selections;
    /// Get ranked wars.
    faction_rankedwars(faction_id: opt) => Faction "rankedwars", selections;
    /// Get ranked war details for a specific faction.
    faction_rankedwarreport(faction_id: id) => Faction "rankedwarreport", selections;
    /// Get your faction's detailed revives.
    faction_revives => Faction "revives", selections;
    /// Get your faction's simplified revives.
    faction_revives_full => Faction "revivesFull", selections;
    /// Get a faction's wars and pacts.
    faction_wars(faction_id: opt) => Faction "wars", selections;
    /// Get all available faction selections.
    faction_lookup => Faction "lookup", selections;
    /// Get the current server time for the faction section.
    faction_timestamp => Faction "timestamp", bare;
    /// Get any faction selection.
    faction => Faction "", selections;

    /// Get item market listings for a specific item.
    market_itemmarket(item_id: id) => Market "itemmarket", selections;
    /// Get all available market selections.
    market_lookup => Market "lookup", selections;
    /// Get the current server time for the market section.
    market_timestamp => Market "timestamp", bare;
    /// Get any market selection.
    market => Market "", selections;

    /// Get cars and their racing stats.
    racing_cars => Racing "cars", selections;
    /// Get all possible car upgrades.
    racing_carupgrades => Racing "carupgrades", selections;
    /// Get races.
    racing_races => Racing "races", selections;
    /// Get details of a specific race.
    racing_race(race_id: id) => Racing "race", selections;
    /// Get track records for a specific track.
    racing_records(track_id: id) => Racing "records", selections;
    /// Get race tracks and descriptions.
    racing_tracks => Racing "tracks", selections;
    /// Get all available racing selections.
    racing_lookup => Racing "lookup", selections;
    /// Get the current server time for the racing section.
    racing_timestamp => Racing "timestamp", bare;
    /// Get any racing selection.
    racing => Racing "", selections;

    /// Get publicly available forum categories.
    forum_categories => Forum "categories", selections;
    /// Get the posts of a specific thread.
    forum_posts(thread_id: id) => Forum "posts", selections;
    /// Get details of a specific thread.
    forum_thread(thread_id: id) => Forum "thread", selections;
    /// Get threads across all forum categories.
    forum_threads => Forum "threads", selections;
    /// Get threads of one or more public forum categories.
    forum_threads_by_category(category_ids: ids) => Forum "threads", selections;
    /// Get all available forum selections.
    forum_lookup => Forum "lookup", selections;
    /// Get the current server time for the forum section.
    forum_timestamp => Forum "timestamp", bare;
    /// Get any forum selection.
    forum => Forum "", selections;

    /// Get attack log details.
    torn_attacklog => Torn "attacklog", selections;
    /// Get bounties.
    torn_bounties => Torn "bounties", selections;
    /// Get calendar information.
    torn_calendar => Torn "calendar", selections;
    /// Get crimes information.
    torn_crimes => Torn "crimes", selections;
    /// Get faction hall of fame positions.
    torn_factionhof => Torn "factionhof", selections;
    /// Get player hall of fame positions.
    torn_hof => Torn "hof", selections;
    /// Get information about ammo.
    torn_itemammo => Torn "itemammo", selections;
    /// Get information about weapon upgrades.
    torn_itemmods => Torn "itemmods", selections;
    /// Get information about items.
    torn_items => Torn "items", selections;
    /// Get information about the given items.
    torn_items_by_ids(item_ids: ids) => Torn "items", selections;
    /// Get available log categories.
    torn_logcategories => Torn "logcategories", selections;
    /// Get all available log ids.
    torn_logtypes => Torn "logtypes", selections;
    /// Get available log ids for a specific log category.
    torn_logtypes_by_category(log_category_id: id) => Torn "logtypes", selections;
    /// Get subcrimes information for a given crime.
    torn_subcrimes(crime_id: id) => Torn "subcrimes", selections;
    /// Get all available torn selections.
    torn_lookup => Torn "lookup", selections;
    /// Get the current server time for the torn section.
    torn_timestamp => Torn "timestamp", bare;
    /// Get any torn selection.
    torn => Torn "", selections;
}

/// Looks an operation up by its method name, e.g. `"faction_members"`.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Endpoint> {
    ENDPOINTS.iter().filter(move |e| e.category == category)
}
