#[cfg(test)]
mod tests {
    use anyhow::{bail, Result};
    use chrono::{NaiveDate, NaiveTime};
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use stempel::api::remote::{date_doc_id, doc_id_date, RemoteDayRecord, RemoteStore};
    use stempel::libs::event::{EventKind, WorkEvent};
    use stempel::libs::sync::{PullOutcome, PushOutcome, Reconciler};
    use stempel::store::breaks::{BreakTable, MemoryBreakTable};
    use stempel::store::events::{EventStore, MemoryEventStore};
    use test_context::{test_context, AsyncTestContext};

    /// Remote double keeping day records in a map, with a failure toggle.
    struct MemoryRemote {
        user: Option<String>,
        records: RwLock<HashMap<NaiveDate, RemoteDayRecord>>,
        fail_writes: bool,
    }

    impl MemoryRemote {
        fn new() -> Self {
            Self {
                user: Some("user-1".to_string()),
                records: RwLock::new(HashMap::new()),
                fail_writes: false,
            }
        }

        fn logged_out() -> Self {
            Self { user: None, ..Self::new() }
        }
    }

    impl RemoteStore for MemoryRemote {
        fn user_id(&self) -> Option<String> {
            self.user.clone()
        }

        async fn fetch_day(&self, _user: &str, date: NaiveDate) -> Result<Option<RemoteDayRecord>> {
            Ok(self.records.read().get(&date).cloned())
        }

        async fn store_day(&self, _user: &str, record: &RemoteDayRecord) -> Result<()> {
            if self.fail_writes {
                bail!("remote unavailable");
            }
            self.records.write().insert(record.date, record.clone());
            Ok(())
        }

        async fn fetch_all(&self, _user: &str) -> Result<Vec<RemoteDayRecord>> {
            Ok(self.records.read().values().cloned().collect())
        }
    }

    struct SyncTestContext {
        store: MemoryEventStore,
        breaks: MemoryBreakTable,
        date: NaiveDate,
    }

    impl AsyncTestContext for SyncTestContext {
        async fn setup() -> Self {
            SyncTestContext {
                store: MemoryEventStore::new(),
                breaks: MemoryBreakTable::new(),
                date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            }
        }
    }

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_doc_id_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(date_doc_id(date), "24_08_2026");
        assert_eq!(doc_id_date("24_08_2026"), Some(date));
        assert_eq!(doc_id_date("garbage"), None);
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_push_without_session(ctx: &mut SyncTestContext) {
        let remote = MemoryRemote::logged_out();
        let outcome = Reconciler::new(&ctx.store, &remote).push_pending().await.unwrap();
        assert_eq!(outcome, PushOutcome::NotLoggedIn);
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_push_marks_events_synced(ctx: &mut SyncTestContext) {
        ctx.store.append(WorkEvent::new(EventKind::CheckIn, ctx.date, clock(9, 0))).unwrap();
        ctx.store.append(WorkEvent::new(EventKind::CheckOut, ctx.date, clock(17, 0))).unwrap();

        let remote = MemoryRemote::new();
        let outcome = Reconciler::new(&ctx.store, &remote).push_pending().await.unwrap();
        assert_eq!(outcome, PushOutcome::Done { succeeded: 2, failed: 0 });
        assert!(ctx.store.read_all().unwrap().iter().all(|event| event.synced));

        let record = remote.records.read()[&ctx.date].clone();
        assert_eq!(record.check_in, Some(clock(9, 0)));
        assert_eq!(record.check_out, Some(clock(17, 0)));
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_push_skips_already_synced(ctx: &mut SyncTestContext) {
        let mut event = WorkEvent::new(EventKind::CheckIn, ctx.date, clock(9, 0));
        event.synced = true;
        ctx.store.append(event).unwrap();

        let remote = MemoryRemote::new();
        let outcome = Reconciler::new(&ctx.store, &remote).push_pending().await.unwrap();
        assert_eq!(outcome, PushOutcome::Done { succeeded: 0, failed: 0 });
        assert!(remote.records.read().is_empty());
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_push_counts_failures_and_continues(ctx: &mut SyncTestContext) {
        ctx.store.append(WorkEvent::new(EventKind::CheckIn, ctx.date, clock(9, 0))).unwrap();
        ctx.store.append(WorkEvent::new(EventKind::CheckOut, ctx.date, clock(17, 0))).unwrap();

        let mut remote = MemoryRemote::new();
        remote.fail_writes = true;
        let outcome = Reconciler::new(&ctx.store, &remote).push_pending().await.unwrap();
        assert_eq!(outcome, PushOutcome::Done { succeeded: 0, failed: 2 });
        assert!(ctx.store.read_all().unwrap().iter().all(|event| !event.synced));
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_remote_break_start_first_wins(ctx: &mut SyncTestContext) {
        ctx.store.append(WorkEvent::new(EventKind::BreakStart, ctx.date, clock(12, 0))).unwrap();
        ctx.store.append(WorkEvent::new(EventKind::BreakStart, ctx.date, clock(14, 0))).unwrap();

        let remote = MemoryRemote::new();
        let reconciler = Reconciler::new(&ctx.store, &remote);
        reconciler.push_pending().await.unwrap();

        // The store lists newest first, so 14:00 is pushed first but the
        // 12:00 start does not displace it remotely once present.
        let record = remote.records.read()[&ctx.date].clone();
        assert_eq!(record.break_start, Some(clock(14, 0)));
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_pull_without_session(ctx: &mut SyncTestContext) {
        let remote = MemoryRemote::logged_out();
        let outcome = Reconciler::new(&ctx.store, &remote).pull_remote(&ctx.breaks).await.unwrap();
        assert_eq!(outcome, PullOutcome::NotLoggedIn);
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_pull_adds_missing_events(ctx: &mut SyncTestContext) {
        let remote = MemoryRemote::new();
        let mut record = RemoteDayRecord::new(ctx.date);
        record.check_in = Some(clock(9, 0));
        record.check_in_ts = Some(1_000);
        record.check_out = Some(clock(17, 0));
        record.check_out_ts = Some(2_000);
        record.break_counted = Some(true);
        remote.records.write().insert(ctx.date, record);

        let outcome = Reconciler::new(&ctx.store, &remote).pull_remote(&ctx.breaks).await.unwrap();
        assert_eq!(outcome, PullOutcome::Done { added: 2 });

        let events = ctx.store.read_all().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|event| event.synced));
        // Rewritten list is newest first.
        assert_eq!(events[0].kind, EventKind::CheckOut);
        assert!(ctx.breaks.break_counted(ctx.date));
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_pull_never_overwrites_local(ctx: &mut SyncTestContext) {
        ctx.store.append(WorkEvent::new(EventKind::CheckIn, ctx.date, clock(8, 0))).unwrap();

        let remote = MemoryRemote::new();
        let mut record = RemoteDayRecord::new(ctx.date);
        record.check_in = Some(clock(9, 30));
        record.check_in_ts = Some(1_000);
        remote.records.write().insert(ctx.date, record);

        let outcome = Reconciler::new(&ctx.store, &remote).pull_remote(&ctx.breaks).await.unwrap();
        assert_eq!(outcome, PullOutcome::Done { added: 0 });

        let events = ctx.store.read_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, clock(8, 0));
    }

    #[test_context(SyncTestContext)]
    #[tokio::test]
    async fn test_pull_restores_holiday_flag(ctx: &mut SyncTestContext) {
        let remote = MemoryRemote::new();
        let mut record = RemoteDayRecord::new(ctx.date);
        record.check_in = Some(clock(8, 0));
        record.check_in_ts = Some(1_000);
        record.is_holiday = true;
        remote.records.write().insert(ctx.date, record);

        Reconciler::new(&ctx.store, &remote).pull_remote(&ctx.breaks).await.unwrap();
        let events = ctx.store.read_all().unwrap();
        assert!(events[0].is_holiday);
    }
}
