/// 一次已排程更新的标识，取消后旧标识即失效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpdate {
    pub token: TimerToken,
    /// 到期时刻，Unix 毫秒
    pub due_at_ms: i64,
}

/// 秒级刷新定时器
///
/// 同一时刻最多只有一次待触发的更新；每次排程都会先作废上一次的标识。
#[derive(Debug)]
pub struct UpdateTimer {
    rate_ms: u64,
    generation: u32,
    pending: Option<PendingUpdate>,
}

impl UpdateTimer {
    pub fn new(rate_ms: u64) -> Self {
        Self {
            rate_ms: rate_ms.max(1),
            generation: 0,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<PendingUpdate> {
        self.pending
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// 返回是否真的取消了一次待触发更新
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn schedule_at(&mut self, due_at_ms: i64) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(PendingUpdate { token, due_at_ms });
        token
    }

    /// 对齐到下一个整周期
    pub fn schedule_next(&mut self, now_ms: i64) -> TimerToken {
        self.schedule_at(now_ms.saturating_add(self.next_delay_ms(now_ms) as i64))
    }

    pub fn next_delay_ms(&self, now_ms: i64) -> u64 {
        let rate = self.rate_ms as i64;
        (rate - now_ms.rem_euclid(rate)) as u64
    }

    /// 触发时调用：标识仍有效则清除待触发状态并返回 true
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
